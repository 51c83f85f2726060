//! Screen controllers: explicit state holders the UI renders from.
//! Each controller owns its state behind a mutex and calls a [`Notify`] hook after every change.

mod home;
mod login;

use std::sync::Arc;

pub use home::{HomeController, HomeState, SubmitOutcome};
pub use login::{LoginController, LoginOutcome, LoginPhase, LoginState};

/// Redraw hook; called with no locks held.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

pub fn noop_notify() -> Notify {
    Arc::new(|| {})
}

/// Modal message shown to the user until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Where the shell should go after a controller action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Login,
}
