//! Backend location and request settings.
//! Resolution: persisted `backend_url` > `PROJTRACK_BACKEND_URL` > built-in default.

use crate::error::{ClientError, Result};
use crate::storage::Storage;
use std::env;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPLOAD_FOLDER_URL: &str =
    "https://otekinc.sharepoint.com/:f:/s/ProjectTracking/EjL6aVYoIIhDixGLoyG-HJ0BPEzI0nW5ZPtKvv6fR4MLMQ?e=oNZ88N";

const BACKEND_URL_KEY: &str = "backend_url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    /// Shared folder where receipts are uploaded before their link is attached to an expense.
    pub upload_folder_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            upload_folder_url: DEFAULT_UPLOAD_FOLDER_URL.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn from_env() -> Result<Self> {
        let base_url = env::var("PROJTRACK_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let timeout_secs = env::var("PROJTRACK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let upload_folder_url = env::var("PROJTRACK_UPLOAD_URL")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_FOLDER_URL.to_string());
        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            request_timeout: Duration::from_secs(timeout_secs),
            upload_folder_url,
        })
    }

    /// Environment defaults overridden by the URL saved from the setup screen.
    pub fn load(storage: &Storage) -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Some(saved) = storage.config_get(BACKEND_URL_KEY)? {
            config.base_url = normalize_base_url(&saved)?;
        }
        Ok(config)
    }

    pub fn save_base_url(storage: &Storage, base_url: &str) -> Result<String> {
        let normalized = normalize_base_url(base_url)?;
        storage.config_set(BACKEND_URL_KEY, &normalized)?;
        Ok(normalized)
    }

    /// `{scheme}://{host}[:{port}]` from the setup screen fields. An empty scheme means http.
    pub fn url_from_host_port(scheme: &str, host: &str, port: &str) -> Result<String> {
        let scheme = match scheme.trim().to_ascii_lowercase().as_str() {
            "" | "http" => "http",
            "https" => "https",
            other => {
                return Err(ClientError::Config(format!("unsupported scheme {:?}", other)));
            }
        };
        let host = host.trim();
        let port = port.trim();
        if host.is_empty() {
            return Err(ClientError::Config("host is empty".to_string()));
        }
        if port.is_empty() {
            return normalize_base_url(&format!("{}://{}", scheme, host));
        }
        let port: u16 = port
            .parse()
            .map_err(|_| ClientError::Config(format!("invalid port {:?}", port)))?;
        normalize_base_url(&format!("{}://{}:{}", scheme, host, port))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ClientError::Config(format!(
            "backend url must start with http:// or https://, got {:?}",
            raw
        )));
    }
    let host = trimmed.split_once("://").map(|(_, rest)| rest).unwrap_or_default();
    if host.is_empty() {
        return Err(ClientError::Config("backend url has no host".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let config = BackendConfig::new(" http://10.0.0.5:5000/ ").expect("config");
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.url("/login"), "http://10.0.0.5:5000/login");
        assert_eq!(config.url("allCompanies"), "http://10.0.0.5:5000/allCompanies");
    }

    #[test]
    fn new_rejects_missing_scheme_and_host() {
        assert!(matches!(BackendConfig::new("10.0.0.5:5000"), Err(ClientError::Config(_))));
        assert!(matches!(BackendConfig::new("http://"), Err(ClientError::Config(_))));
    }

    #[test]
    fn url_from_host_port_builds_http_url() {
        assert_eq!(
            BackendConfig::url_from_host_port("http", "192.168.1.20", "8080").expect("url"),
            "http://192.168.1.20:8080"
        );
        assert_eq!(
            BackendConfig::url_from_host_port("", "api.local", "").expect("url"),
            "http://api.local"
        );
        assert!(BackendConfig::url_from_host_port("http", "", "8080").is_err());
        assert!(BackendConfig::url_from_host_port("http", "host", "99999").is_err());
    }

    #[test]
    fn url_from_host_port_keeps_https() {
        assert_eq!(
            BackendConfig::url_from_host_port("https", "tracking.example.com", "").expect("url"),
            "https://tracking.example.com"
        );
        assert_eq!(
            BackendConfig::url_from_host_port("HTTPS", "tracking.example.com", "8443").expect("url"),
            "https://tracking.example.com:8443"
        );
        assert!(matches!(
            BackendConfig::url_from_host_port("ftp", "host", ""),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn saved_url_overrides_default() {
        let storage = Storage::open_in_memory().expect("open");
        BackendConfig::save_base_url(&storage, "https://tracking.example.com/").expect("save");
        let config = BackendConfig::load(&storage).expect("load");
        assert_eq!(config.base_url, "https://tracking.example.com");
        assert!(config.request_timeout > Duration::ZERO);
    }

    #[test]
    fn save_rejects_invalid_url_without_writing() {
        let storage = Storage::open_in_memory().expect("open");
        assert!(BackendConfig::save_base_url(&storage, "ftp://x").is_err());
        assert_eq!(storage.config_get(BACKEND_URL_KEY).expect("get"), None);
    }
}
