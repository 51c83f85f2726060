//! Persisted login session: the server-issued token and the engineer id.

use crate::error::Result;
use crate::storage::Storage;
use log::info;

const TOKEN_KEY: &str = "token";
const ENGINEER_ID_KEY: &str = "engineer_id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub engineer_id: Option<String>,
}

/// Reads and writes the session through [`Storage`]. A session exists iff a token is stored.
#[derive(Clone)]
pub struct SessionStore {
    storage: Storage,
}

impl SessionStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> Result<Option<Session>> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };
        Ok(Some(Session {
            token,
            engineer_id: self.engineer_id()?,
        }))
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.storage.config_get(TOKEN_KEY)
    }

    pub fn engineer_id(&self) -> Result<Option<String>> {
        self.storage.config_get(ENGINEER_ID_KEY)
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().ok().flatten().is_some()
    }

    pub fn set(&self, token: &str, engineer_id: Option<&str>) -> Result<()> {
        self.storage
            .config_apply(&[(TOKEN_KEY, Some(token)), (ENGINEER_ID_KEY, engineer_id)])?;
        info!("session stored (engineer_id={:?})", engineer_id);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.storage
            .config_apply(&[(TOKEN_KEY, None), (ENGINEER_ID_KEY, None)])?;
        info!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Storage::open_in_memory().expect("open"))
    }

    #[test]
    fn empty_store_has_no_session() {
        let store = store();
        assert_eq!(store.get().expect("get"), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn set_then_get_round_trips_both_fields() {
        let store = store();
        store.set("tok-1", Some("42")).expect("set");
        assert_eq!(
            store.get().expect("get"),
            Some(Session {
                token: "tok-1".to_string(),
                engineer_id: Some("42".to_string()),
            })
        );
        assert!(store.is_logged_in());
    }

    #[test]
    fn set_without_engineer_id_drops_stale_one() {
        let store = store();
        store.set("tok-1", Some("42")).expect("set");
        store.set("tok-2", None).expect("set");
        let session = store.get().expect("get").expect("session");
        assert_eq!(session.token, "tok-2");
        assert_eq!(session.engineer_id, None);
    }

    #[test]
    fn engineer_id_alone_is_not_a_session() {
        let storage = Storage::open_in_memory().expect("open");
        storage.config_set(ENGINEER_ID_KEY, "7").expect("set");
        let store = SessionStore::new(storage);
        assert_eq!(store.get().expect("get"), None);
    }

    #[test]
    fn clear_removes_token_and_engineer_id() {
        let store = store();
        store.set("tok-1", Some("42")).expect("set");
        store.clear().expect("clear");
        assert_eq!(store.token().expect("token"), None);
        assert_eq!(store.engineer_id().expect("engineer_id"), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn session_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        SessionStore::new(Storage::open(dir.path()).expect("open"))
            .set("persisted", Some("3"))
            .expect("set");
        let reopened = SessionStore::new(Storage::open(dir.path()).expect("reopen"));
        assert_eq!(reopened.token().expect("token").as_deref(), Some("persisted"));
    }
}
