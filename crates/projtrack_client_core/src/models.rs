//! Wire models for companies, projects and expenses, plus the enumerations the screens pick from.
//! JSON uses the backend's snake_case column names.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Company filter value meaning "no company restriction". Sent to the server verbatim.
pub const ALL_COMPANIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: i64,
    pub company_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: i64,
    pub project_name: String,
    #[serde(default)]
    pub project_number: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub project_status: Option<i64>,
}

impl Project {
    pub fn status(&self) -> Option<ProjectStatus> {
        self.project_status.map(ProjectStatus::from_code)
    }
}

/// Row returned by `/projectIdMobile`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct ProjectIdRow {
    pub project_id: i64,
}

/// Project lifecycle state used as a list filter. `All` is a filter sentinel, not a real state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    #[default]
    Ongoing,
    Completed,
    BillSubmitted,
    ToBeSubmitted,
    All,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
        ProjectStatus::BillSubmitted,
        ProjectStatus::ToBeSubmitted,
        ProjectStatus::All,
    ];

    /// Unknown codes map to `All`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ProjectStatus::Ongoing,
            2 => ProjectStatus::Completed,
            3 => ProjectStatus::BillSubmitted,
            4 => ProjectStatus::ToBeSubmitted,
            _ => ProjectStatus::All,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ProjectStatus::Ongoing => 1,
            ProjectStatus::Completed => 2,
            ProjectStatus::BillSubmitted => 3,
            ProjectStatus::ToBeSubmitted => 4,
            ProjectStatus::All => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::BillSubmitted => "Bill Submitted",
            ProjectStatus::ToBeSubmitted => "To Be Submitted",
            ProjectStatus::All => "All",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expense category. Travels as its numeric code in a string ("0".."5").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpenseType {
    Tools,
    Transportation,
    Meals,
    Medical,
    Accommodation,
    Miscellaneous,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 6] = [
        ExpenseType::Tools,
        ExpenseType::Transportation,
        ExpenseType::Meals,
        ExpenseType::Medical,
        ExpenseType::Accommodation,
        ExpenseType::Miscellaneous,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExpenseType::Tools => "0",
            ExpenseType::Transportation => "1",
            ExpenseType::Meals => "2",
            ExpenseType::Medical => "3",
            ExpenseType::Accommodation => "4",
            ExpenseType::Miscellaneous => "5",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Tools => "Tools",
            ExpenseType::Transportation => "Transportation",
            ExpenseType::Meals => "Meals",
            ExpenseType::Medical => "Medical",
            ExpenseType::Accommodation => "Accommodation",
            ExpenseType::Miscellaneous => "Miscellaneous",
        }
    }
}

impl Serialize for ExpenseType {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ExpenseType {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let s = String::deserialize(de)?;
        ExpenseType::from_code(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown expense type {:?}", s)))
    }
}

/// Client-side expense form contents. Nothing here is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub project_name: Option<String>,
    pub expense_type: Option<ExpenseType>,
    pub amount: String,
    pub expense_date: NaiveDate,
    pub pdf_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingProject,
    MissingExpenseType,
    MissingAmount,
    InvalidAmount,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingProject
            | DraftError::MissingExpenseType
            | DraftError::MissingAmount => f.write_str("Please fill in all required fields."),
            DraftError::InvalidAmount => f.write_str("Please enter a valid expense amount."),
        }
    }
}

/// Fields of a draft that passed validation, ready to be resolved against the server.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidDraft {
    pub project_name: String,
    pub expense_type: ExpenseType,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub pdf_url: String,
}

impl ExpenseDraft {
    pub fn new(expense_date: NaiveDate) -> Self {
        Self {
            project_name: None,
            expense_type: None,
            amount: String::new(),
            expense_date,
            pdf_url: String::new(),
        }
    }

    pub fn validate(&self) -> Result<ValidDraft, DraftError> {
        let expense_type = self.expense_type.ok_or(DraftError::MissingExpenseType)?;
        if self.amount.trim().is_empty() {
            return Err(DraftError::MissingAmount);
        }
        let project_name = self
            .project_name
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(DraftError::MissingProject)?;
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidAmount)?;
        if !amount.is_finite() {
            return Err(DraftError::InvalidAmount);
        }
        Ok(ValidDraft {
            project_name: project_name.to_string(),
            expense_type,
            amount,
            expense_date: self.expense_date,
            pdf_url: crate::format::format_url(&self.pdf_url),
        })
    }
}

/// Body of `POST /addExpense`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpensePayload {
    pub project_id: i64,
    pub expense_type: ExpenseType,
    pub amount: f64,
    #[serde(serialize_with = "serialize_date")]
    pub expense_date: NaiveDate,
    pub pdf_url: String,
    pub engineer_id: Option<String>,
}

impl ExpensePayload {
    pub fn new(draft: ValidDraft, project_id: i64, engineer_id: Option<String>) -> Self {
        Self {
            project_id,
            expense_type: draft.expense_type,
            amount: draft.amount,
            expense_date: draft.expense_date,
            pdf_url: draft.pdf_url,
            engineer_id,
        }
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&date.format("%Y-%m-%d").to_string())
}
