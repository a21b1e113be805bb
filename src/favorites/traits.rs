use async_trait::async_trait;
use std::path::PathBuf;

/// Failure talking to a favorites backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile store answered {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed favorites document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid user id {0:?}")]
    InvalidUser(String),

    #[error("profile store unavailable")]
    Unavailable,
}

impl StoreError {
    /// Failures that mean the store could not be reached, as opposed to
    /// bad data or a bad request from us.
    pub fn is_connectivity(&self) -> bool {
        match self {
            StoreError::Http(_) | StoreError::Unavailable => true,
            StoreError::Status(status) => status.is_server_error(),
            StoreError::Io { .. } | StoreError::Parse(_) | StoreError::InvalidUser(_) => false,
        }
    }
}

/// Per-user persistence for favorite property ids.
/// Implemented by the remote profile API and by the on-device fallback.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Favorite ids for `user_id`; a user with nothing saved yields an empty list
    async fn load_favorites(&self, user_id: &str) -> Result<Vec<String>, StoreError>;

    /// Replace the saved favorites for `user_id`
    async fn save_favorites(&self, user_id: &str, favorites: &[String]) -> Result<(), StoreError>;

    /// Whether the store can currently be reached
    async fn is_available(&self) -> bool {
        true
    }

    fn store_name(&self) -> &'static str;
}

/// User ids end up in file names and URL paths.
pub(crate) fn validate_user_id(user_id: &str) -> Result<(), StoreError> {
    let valid = !user_id.is_empty()
        && user_id != "."
        && user_id != ".."
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidUser(user_id.to_string()))
    }
}
