//! Startup routing and backend setup fields.

use pretty_assertions::assert_eq;
use projtrack_client_core::{Services, SessionStore, Storage};
use projtrack_frontend::app::{initial_route, Route};
use projtrack_frontend::screens::BackendAddress;

fn sessions() -> (tempfile::TempDir, SessionStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::open(dir.path()).expect("open storage");
    (dir, SessionStore::new(storage))
}

#[test]
fn starts_on_login_without_a_session() {
    let (_dir, sessions) = sessions();
    assert_eq!(initial_route(&sessions), Route::Login);
}

#[test]
fn starts_on_home_with_a_stored_token() {
    let (_dir, sessions) = sessions();
    sessions.set("tok", Some("7")).expect("set");
    assert_eq!(initial_route(&sessions), Route::Home);

    sessions.clear().expect("clear");
    assert_eq!(initial_route(&sessions), Route::Login);
}

#[test]
fn session_survives_reopening_the_data_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let sessions = SessionStore::new(Storage::open(dir.path()).expect("open"));
        sessions.set("tok", None).expect("set");
    }
    let sessions = SessionStore::new(Storage::open(dir.path()).expect("reopen"));
    assert_eq!(initial_route(&sessions), Route::Home);
}

fn address(scheme: &str, host: &str, port: &str) -> BackendAddress {
    BackendAddress {
        scheme: scheme.to_string(),
        host: host.to_string(),
        port: port.to_string(),
    }
}

#[test]
fn backend_address_splits_scheme_host_and_port() {
    assert_eq!(
        BackendAddress::parse("http://192.168.1.20:5000"),
        address("http", "192.168.1.20", "5000")
    );
    assert_eq!(
        BackendAddress::parse("https://api.example.com"),
        address("https", "api.example.com", "")
    );
    assert_eq!(
        BackendAddress::parse("http://host:8080/base"),
        address("http", "host", "8080")
    );
    assert_eq!(BackendAddress::parse("localhost"), address("http", "localhost", ""));
}

#[test]
fn https_backend_survives_the_setup_form() {
    for url in ["https://tracking.example.com", "https://tracking.example.com:8443"] {
        let saved = BackendAddress::parse(url).to_url().expect("url");
        assert_eq!(saved, url);
    }
}

#[test]
fn saving_https_address_persists_https() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut services = Services::open(dir.path()).expect("open");
    let url = BackendAddress::parse("https://tracking.example.com")
        .to_url()
        .expect("url");
    services.set_backend_url(&url).expect("save");

    let reopened = Services::open(dir.path()).expect("reopen");
    assert_eq!(reopened.api.config().base_url, "https://tracking.example.com");
}
