use super::{Alert, Notify};
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::session::{Session, SessionStore};
use log::{info, warn};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Ready for input; also where a rejected attempt ends up.
    #[default]
    Idle,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub phase: LoginPhase,
    pub alert: Option<Alert>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(Session),
    Rejected,
    /// A submit was already pending; nothing was sent.
    Busy,
}

#[derive(Clone)]
pub struct LoginController {
    api: ApiClient,
    sessions: SessionStore,
    state: Arc<Mutex<LoginState>>,
    notify: Notify,
}

impl LoginController {
    pub fn new(api: ApiClient, sessions: SessionStore, notify: Notify) -> Self {
        Self {
            api,
            sessions,
            state: Arc::new(Mutex::new(LoginState::default())),
            notify,
        }
    }

    pub fn snapshot(&self) -> LoginState {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut LoginState) -> R) -> R {
        let out = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut *state)
        };
        (self.notify)();
        out
    }

    pub fn set_username(&self, username: String) {
        self.update(|s| s.username = username);
    }

    pub fn set_password(&self, password: String) {
        self.update(|s| s.password = password);
    }

    pub fn dismiss_alert(&self) {
        self.update(|s| s.alert = None);
    }

    pub async fn submit(&self) -> LoginOutcome {
        let credentials = self.update(|s| {
            if s.phase == LoginPhase::Pending {
                return Err(LoginOutcome::Busy);
            }
            if s.username.trim().is_empty() || s.password.is_empty() {
                s.alert = Some(Alert::new(
                    "Login Failed",
                    "Please enter your username and password.",
                ));
                return Err(LoginOutcome::Rejected);
            }
            s.phase = LoginPhase::Pending;
            s.alert = None;
            Ok((s.username.trim().to_string(), s.password.clone()))
        });
        let (username, password) = match credentials {
            Ok(c) => c,
            Err(outcome) => return outcome,
        };

        let result = self
            .api
            .login(&username, &password)
            .await
            .and_then(|resp| {
                self.sessions
                    .set(&resp.token, resp.engineer_id.as_deref())
                    .map(|()| Session {
                        token: resp.token,
                        engineer_id: resp.engineer_id,
                    })
            });

        match result {
            Ok(session) => {
                info!("login succeeded for {}", username);
                self.update(|s| {
                    s.phase = LoginPhase::Idle;
                    s.password.clear();
                    s.alert = Some(Alert::new("Login Successful", ""));
                });
                LoginOutcome::LoggedIn(session)
            }
            Err(e) => {
                warn!("login failed for {}: {}", username, e);
                let alert = match e {
                    ClientError::Status { .. } => {
                        Alert::new("Login Failed", "Invalid username or password")
                    }
                    _ => Alert::new("Error", "Something went wrong"),
                };
                self.update(|s| {
                    s.phase = LoginPhase::Idle;
                    s.alert = Some(alert);
                });
                LoginOutcome::Rejected
            }
        }
    }
}
