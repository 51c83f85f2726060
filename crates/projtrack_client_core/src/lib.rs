//! Project tracking client core: everything the screens need except rendering.
//!
//! - [`storage`] / [`session`]: SQLite-backed token and engineer id.
//! - [`config`]: backend URL and request settings.
//! - [`api`]: HTTP calls to the backend.
//! - [`controllers`]: Login and Home state holders driven by the UI.

pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod format;
pub mod models;
pub mod session;
pub mod storage;

pub use api::{ApiClient, LoginResponse};
pub use config::BackendConfig;
pub use controllers::{
    Alert, HomeController, HomeState, LoginController, LoginOutcome, LoginPhase, LoginState,
    Navigation, Notify, SubmitOutcome,
};
pub use error::{ClientError, Result};
pub use models::{Company, ExpenseDraft, ExpenseType, Project, ProjectStatus, ALL_COMPANIES};
pub use session::{Session, SessionStore};
pub use storage::Storage;

/// Everything a screen needs to talk to the backend, built once at startup.
#[derive(Clone)]
pub struct Services {
    pub storage: Storage,
    pub sessions: SessionStore,
    pub api: ApiClient,
}

impl Services {
    /// Open storage in `data_dir` and build the API client from the resolved config.
    pub fn open(data_dir: impl AsRef<std::path::Path>) -> Result<Self> {
        let storage = Storage::open(data_dir)?;
        let config = BackendConfig::load(&storage)?;
        log::info!("backend: {}", config.base_url);
        Self::with_config(storage, config)
    }

    pub fn with_config(storage: Storage, config: BackendConfig) -> Result<Self> {
        Ok(Self {
            sessions: SessionStore::new(storage.clone()),
            api: ApiClient::new(config)?,
            storage,
        })
    }

    /// Point the API client at a new backend and persist the choice.
    pub fn set_backend_url(&mut self, base_url: &str) -> Result<()> {
        let normalized = BackendConfig::save_base_url(&self.storage, base_url)?;
        let config = BackendConfig {
            base_url: normalized,
            ..self.api.config().clone()
        };
        self.api = ApiClient::new(config)?;
        Ok(())
    }
}
