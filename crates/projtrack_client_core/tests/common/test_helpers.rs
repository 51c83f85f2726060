//! Shared helpers: a mockito backend plus services wired to it over temp storage.

use chrono::NaiveDate;
use projtrack_client_core::storage::DB_FILE_NAME;
use projtrack_client_core::{BackendConfig, Notify, Services, Storage};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const TOKEN: &str = "tok-abc";
pub const ENGINEER_ID: &str = "17";

pub const COMPANIES_JSON: &str = r#"[
    {"company_id": 1, "company_name": "Acme"},
    {"company_id": 2, "company_name": "Globex"}
]"#;

pub const PROJECTS_JSON: &str = r#"[
    {"project_id": 10, "project_name": "Bridge Retrofit", "project_number": "P-010", "company_name": "Acme", "project_status": 1},
    {"project_id": 11, "project_name": "Pump House", "project_number": "P-011", "company_name": "Globex", "project_status": 1}
]"#;

pub const ACME_PROJECTS_JSON: &str = r#"[
    {"project_id": 10, "project_name": "Bridge Retrofit", "project_number": "P-010", "company_name": "Acme", "project_status": 1}
]"#;

/// One simulated app: its own storage directory and a mock backend.
pub struct TestApp {
    pub server: mockito::ServerGuard,
    pub services: Services,
    dir: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = Storage::open(dir.path()).expect("storage");
        let config = BackendConfig::new(&server.url()).expect("config");
        let services = Services::with_config(storage, config).expect("services");
        Self {
            server,
            services,
            dir,
        }
    }

    /// The SQLite file backing `services`, for tests that contend on it.
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(DB_FILE_NAME)
    }

    pub fn log_in(&self) {
        self.services
            .sessions
            .set(TOKEN, Some(ENGINEER_ID))
            .expect("set session");
    }
}

/// Services over in-memory storage pointed at `base_url`.
pub fn services_for(base_url: &str) -> Services {
    let storage = Storage::open_in_memory().expect("storage");
    let config = BackendConfig::new(base_url).expect("config");
    Services::with_config(storage, config).expect("services")
}

/// Notify hook that counts redraw requests.
pub fn counting_notify() -> (Notify, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook = {
        let count = count.clone();
        Arc::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        }) as Notify
    };
    (hook, count)
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 14).expect("date")
}
