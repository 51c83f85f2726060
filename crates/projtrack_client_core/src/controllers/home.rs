//! Home screen orchestration: session check, company/project loading, filters,
//! and the expense form.
//!
//! Companies and projects load concurrently on mount and update disjoint state.
//! Each fetch runs under its own cancellation token, child of a per-mount root:
//! a newer project fetch cancels the older one, and `unmount` cancels everything,
//! so a late response can never overwrite newer state.

use super::{Alert, Navigation, Notify};
use crate::api::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{
    Company, DraftError, ExpenseDraft, ExpensePayload, ExpenseType, Project, ProjectStatus,
    ValidDraft, ALL_COMPANIES,
};
use crate::session::{Session, SessionStore};
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use reqwest::StatusCode;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

#[derive(Clone, Debug, PartialEq)]
pub struct HomeState {
    pub companies: Vec<Company>,
    pub projects: Vec<Project>,
    pub company_filter: String,
    pub status_filter: ProjectStatus,
    /// Selected project plus the expense form fields.
    pub draft: ExpenseDraft,
    pub loading_companies: bool,
    pub loading_projects: bool,
    pub submitting: bool,
    pub alert: Option<Alert>,
}

impl HomeState {
    fn new(today: NaiveDate) -> Self {
        Self {
            companies: Vec::new(),
            projects: Vec::new(),
            company_filter: ALL_COMPANIES.to_string(),
            status_filter: ProjectStatus::default(),
            draft: ExpenseDraft::new(today),
            loading_companies: false,
            loading_projects: false,
            submitting: false,
            alert: None,
        }
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.draft.project_name.as_deref()
    }

    /// The expense form is only offered once a project is picked.
    pub fn show_expense_form(&self) -> bool {
        self.selected_project().is_some()
    }

    /// After a successful submit: keep the project and date, clear the rest.
    fn clear_all_but_project(&mut self) {
        self.company_filter = ALL_COMPANIES.to_string();
        self.draft.expense_type = None;
        self.draft.amount.clear();
        self.draft.pdf_url.clear();
    }

    fn clear_fields(&mut self) {
        self.clear_all_but_project();
        self.draft.project_name = None;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Submitted,
    Invalid(DraftError),
    /// Server answered with something other than 200, or the request failed. The draft is kept.
    Failed,
    /// Another submit is still in flight.
    Busy,
    Login,
}

#[derive(Clone, Copy)]
enum FetchKind {
    Companies,
    Projects,
}

struct Fetches {
    root: CancellationToken,
    companies: Option<CancellationToken>,
    projects: Option<CancellationToken>,
}

impl Fetches {
    fn slot(&mut self, kind: FetchKind) -> &mut Option<CancellationToken> {
        match kind {
            FetchKind::Companies => &mut self.companies,
            FetchKind::Projects => &mut self.projects,
        }
    }
}

struct Inner {
    api: ApiClient,
    sessions: SessionStore,
    state: Mutex<HomeState>,
    fetches: Mutex<Fetches>,
    notify: Notify,
}

#[derive(Clone)]
pub struct HomeController {
    inner: Arc<Inner>,
}

impl HomeController {
    pub fn new(api: ApiClient, sessions: SessionStore, today: NaiveDate, notify: Notify) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                sessions,
                state: Mutex::new(HomeState::new(today)),
                fetches: Mutex::new(Fetches {
                    root: CancellationToken::new(),
                    companies: None,
                    projects: None,
                }),
                notify,
            }),
        }
    }

    pub fn snapshot(&self) -> HomeState {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn read<R>(&self, f: impl FnOnce(&HomeState) -> R) -> R {
        let state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&*state)
    }

    fn update<R>(&self, f: impl FnOnce(&mut HomeState) -> R) -> R {
        let out = {
            let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut *state)
        };
        (self.inner.notify)();
        out
    }

    fn session(&self) -> Option<Session> {
        match self.inner.sessions.get() {
            Ok(session) => session,
            Err(e) => {
                error!("home: reading session failed: {}", e);
                None
            }
        }
    }

    /// Verify the session, then load companies and projects side by side.
    /// Without a session nothing is requested and the caller must show Login.
    pub async fn mount(&self) -> Navigation {
        let Some(session) = self.session() else {
            info!("home: no session, redirecting to login");
            return Navigation::Login;
        };
        {
            let mut fetches = self.inner.fetches.lock().unwrap_or_else(|e| e.into_inner());
            fetches.root.cancel();
            fetches.root = CancellationToken::new();
        }
        let (status, company) = self.read(|s| (s.status_filter, s.company_filter.clone()));
        tokio::join!(
            self.load_companies(&session.token),
            self.load_projects(&session.token, status, company),
        );
        Navigation::Stay
    }

    /// Cancel every in-flight fetch. Late responses are discarded.
    pub fn unmount(&self) {
        let fetches = self.inner.fetches.lock().unwrap_or_else(|e| e.into_inner());
        fetches.root.cancel();
    }

    fn begin_fetch(&self, kind: FetchKind) -> CancellationToken {
        let mut fetches = self.inner.fetches.lock().unwrap_or_else(|e| e.into_inner());
        let token = fetches.root.child_token();
        if let Some(previous) = fetches.slot(kind).replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    async fn cancellable<T>(
        cancel: &CancellationToken,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::select! {
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            res = fut => res,
        }
    }

    async fn load_companies(&self, token: &str) {
        let cancel = self.begin_fetch(FetchKind::Companies);
        self.update(|s| s.loading_companies = true);
        let result = Self::cancellable(&cancel, self.inner.api.list_companies(token)).await;
        if cancel.is_cancelled() {
            debug!("home: companies fetch cancelled");
            return;
        }
        self.update(|s| {
            s.loading_companies = false;
            match result {
                Ok(companies) => s.companies = companies,
                Err(e) if e.is_unauthorized() => warn!("home: session rejected fetching companies: {}", e),
                Err(e) => warn!("home: fetching companies failed: {}", e),
            }
        });
    }

    async fn load_projects(&self, token: &str, status: ProjectStatus, company: String) {
        let cancel = self.begin_fetch(FetchKind::Projects);
        self.update(|s| s.loading_projects = true);
        let result = Self::cancellable(
            &cancel,
            self.inner.api.list_projects(token, status, &company),
        )
        .await;
        if cancel.is_cancelled() {
            debug!("home: projects fetch for {:?}/{} superseded", company, status);
            return;
        }
        self.update(|s| {
            s.loading_projects = false;
            match result {
                Ok(projects) => s.projects = projects,
                Err(e) if e.is_unauthorized() => warn!("home: session rejected fetching projects: {}", e),
                Err(e) => warn!("home: fetching projects failed: {}", e),
            }
        });
    }

    async fn reload_projects(&self) -> Navigation {
        let Some(session) = self.session() else {
            return Navigation::Login;
        };
        let (status, company) = self.read(|s| (s.status_filter, s.company_filter.clone()));
        self.load_projects(&session.token, status, company).await;
        Navigation::Stay
    }

    /// Change the company filter and re-fetch projects. Companies are not reloaded.
    pub async fn set_company_filter(&self, company: String) -> Navigation {
        self.update(|s| s.company_filter = company);
        self.reload_projects().await
    }

    pub async fn set_status_filter(&self, status: ProjectStatus) -> Navigation {
        self.update(|s| s.status_filter = status);
        self.reload_projects().await
    }

    /// Local only. Empty names and the picker's "null" placeholder mean no selection.
    pub fn select_project(&self, project_name: Option<String>) {
        let project_name = project_name.filter(|p| !p.is_empty() && p != "null");
        self.update(|s| s.draft.project_name = project_name);
    }

    pub fn set_expense_type(&self, expense_type: Option<ExpenseType>) {
        self.update(|s| s.draft.expense_type = expense_type);
    }

    pub fn set_amount(&self, amount: String) {
        self.update(|s| s.draft.amount = amount);
    }

    pub fn set_pdf_url(&self, pdf_url: String) {
        self.update(|s| s.draft.pdf_url = pdf_url);
    }

    pub fn set_expense_date(&self, date: NaiveDate) {
        self.update(|s| s.draft.expense_date = date);
    }

    pub fn dismiss_alert(&self) {
        self.update(|s| s.alert = None);
    }

    /// Validate locally, resolve the project id, then post the expense.
    /// Nothing is sent when validation fails.
    pub async fn submit_expense(&self) -> SubmitOutcome {
        let checked = self.update(|s| {
            if s.submitting {
                return Err(SubmitOutcome::Busy);
            }
            match s.draft.validate() {
                Ok(valid) => {
                    s.submitting = true;
                    Ok(valid)
                }
                Err(e) => {
                    s.alert = Some(Alert::new("Validation Error", e.to_string()));
                    Err(SubmitOutcome::Invalid(e))
                }
            }
        });
        let valid = match checked {
            Ok(v) => v,
            Err(outcome) => return outcome,
        };
        let Some(session) = self.session() else {
            self.update(|s| s.submitting = false);
            return SubmitOutcome::Login;
        };

        let result = self.post_expense(&session, valid).await;
        match result {
            Ok(StatusCode::OK) => {
                info!("home: expense submitted");
                let company_changed = self.update(|s| {
                    s.submitting = false;
                    s.alert = Some(Alert::new(
                        "Submitted",
                        "Your expense has been submitted successfully.",
                    ));
                    let changed = s.company_filter != ALL_COMPANIES;
                    s.clear_all_but_project();
                    changed
                });
                if company_changed {
                    self.reload_projects().await;
                }
                SubmitOutcome::Submitted
            }
            other => {
                match other {
                    Ok(status) => error!("home: expense submission failed: {}", status),
                    Err(e) => error!("home: error submitting expense: {}", e),
                }
                self.update(|s| {
                    s.submitting = false;
                    s.alert = Some(Alert::new(
                        "Error",
                        "There was an issue submitting your expense.",
                    ));
                });
                SubmitOutcome::Failed
            }
        }
    }

    async fn post_expense(&self, session: &Session, draft: ValidDraft) -> Result<StatusCode> {
        let api = &self.inner.api;
        let project_id = api.find_project_id(&session.token, &draft.project_name).await?;
        let payload = ExpensePayload::new(draft, project_id, session.engineer_id.clone());
        api.submit_expense(&session.token, &payload).await
    }

    /// Discard the expense form and the project selection.
    pub async fn cancel_expense(&self) -> Navigation {
        let company_changed = self.update(|s| {
            let changed = s.company_filter != ALL_COMPANIES;
            s.clear_fields();
            changed
        });
        if company_changed {
            return self.reload_projects().await;
        }
        Navigation::Stay
    }

    /// Drop the stored session. On storage failure the user stays on Home with an alert
    /// and fetches keep working; in-flight fetches are only cancelled once the session is gone.
    pub fn logout(&self) -> Navigation {
        match self.inner.sessions.clear() {
            Ok(()) => {
                self.unmount();
                info!("home: logged out");
                Navigation::Login
            }
            Err(e) => {
                error!("home: logout failed: {}", e);
                self.update(|s| s.alert = Some(Alert::new("Error", "Could not log out.")));
                Navigation::Stay
            }
        }
    }
}
