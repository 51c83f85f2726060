//! HTTP client for the project tracking backend (login, companies, projects, expenses).
//! Authenticated calls carry the session token in the `access-token` header.

use crate::config::BackendConfig;
use crate::error::{ClientError, Result};
use crate::models::{Company, ExpensePayload, Project, ProjectIdRow, ProjectStatus};
use log::debug;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

pub const TOKEN_HEADER: &str = "access-token";

/// Credentials issued by `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub engineer_id: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl ApiClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.http
            .get(self.config.url(path))
            .header(TOKEN_HEADER, token)
    }

    async fn send(&self, label: &str, req: RequestBuilder) -> Result<Response> {
        debug!("api::{} ->", label);
        let resp = req.send().await?;
        debug!("api::{} <- {}", label, resp.status());
        Ok(resp)
    }

    async fn json<T: DeserializeOwned>(&self, label: &str, req: RequestBuilder) -> Result<T> {
        let resp = self.send(label, req).await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body: text });
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// POST /login -> token (body field or `access-token` header) and engineer id.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({ "username": username, "password": password });
        let resp = self
            .send("login", self.http.post(self.config.url("/login")).json(&body))
            .await?;
        let status = resp.status();
        let header_token = resp
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body: text });
        }
        let json: serde_json::Value = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        let token = first_string(&json, &["token", "accessToken", "access_token"])
            .or(header_token)
            .ok_or(ClientError::MissingToken)?;
        let engineer_id = first_string(&json, &["engineer_id", "engineerId", "user_id"]);
        Ok(LoginResponse { token, engineer_id })
    }

    /// GET /allCompanies
    pub async fn list_companies(&self, token: &str) -> Result<Vec<Company>> {
        self.json("list_companies", self.get("/allCompanies", token)).await
    }

    /// GET /projectsMobile?projectDisplayStatus=..&selectedCompanyName=..
    /// `company` goes out verbatim, including the "All" sentinel.
    pub async fn list_projects(
        &self,
        token: &str,
        status: ProjectStatus,
        company: &str,
    ) -> Result<Vec<Project>> {
        let code = status.code().to_string();
        let req = self.get("/projectsMobile", token).query(&[
            ("projectDisplayStatus", code.as_str()),
            ("selectedCompanyName", company),
        ]);
        self.json("list_projects", req).await
    }

    /// GET /projectIdMobile?projectName=.. -> id of the first matching row.
    pub async fn find_project_id(&self, token: &str, project_name: &str) -> Result<i64> {
        let req = self
            .get("/projectIdMobile", token)
            .query(&[("projectName", project_name)]);
        let rows: Vec<ProjectIdRow> = self.json("find_project_id", req).await?;
        rows.first()
            .map(|r| r.project_id)
            .ok_or_else(|| ClientError::ProjectNotFound(project_name.to_string()))
    }

    /// POST /addExpense. Returns whatever status the server answered with; callers decide what counts as success.
    pub async fn submit_expense(&self, token: &str, payload: &ExpensePayload) -> Result<StatusCode> {
        let req = self
            .http
            .post(self.config.url("/addExpense"))
            .header(TOKEN_HEADER, token)
            .json(payload);
        let resp = self.send("submit_expense", req).await?;
        Ok(resp.status())
    }

    /// Reachability check for the setup screen: any HTTP answer means the host is up.
    pub async fn ping(&self) -> Result<StatusCode> {
        let resp = self.send("ping", self.http.get(self.config.url("/"))).await?;
        Ok(resp.status())
    }
}

fn first_string(json: &serde_json::Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match json.get(*k)? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_string_prefers_earlier_keys_and_stringifies_numbers() {
        let json = serde_json::json!({ "accessToken": "b", "token": "a", "engineer_id": 17 });
        assert_eq!(first_string(&json, &["token", "accessToken"]).as_deref(), Some("a"));
        assert_eq!(first_string(&json, &["engineer_id"]).as_deref(), Some("17"));
        assert_eq!(first_string(&json, &["missing"]), None);
        assert_eq!(first_string(&serde_json::Value::Null, &["token"]), None);
    }

    #[test]
    fn first_string_skips_empty_strings() {
        let json = serde_json::json!({ "token": "", "access_token": "c" });
        assert_eq!(
            first_string(&json, &["token", "accessToken", "access_token"]).as_deref(),
            Some("c")
        );
    }
}
