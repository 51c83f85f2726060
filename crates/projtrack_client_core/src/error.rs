//! Error type shared by storage, API client and controllers.

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("storage io error: {0}")]
    StorageIo(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("login response did not contain a token")]
    MissingToken,

    #[error("no project named {0:?}")]
    ProjectNotFound(String),

    #[error("request cancelled")]
    Cancelled,
}

impl ClientError {
    /// HTTP status when the server answered with a non-success code.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// The server rejected the credentials or the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}
