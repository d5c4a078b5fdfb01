//! Credential store trait abstraction.

use async_trait::async_trait;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the access credential is persisted.
///
/// Screens only ever read the token, once per request. Writing and clearing
/// exist for the login/logout flow outside the screens.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the stored access token, `None` when not logged in.
    async fn access_token(&self) -> Result<Option<String>>;

    /// Persist an access token, replacing any previous one.
    async fn save_access_token(&self, token: &str) -> Result<()>;

    /// Forget the stored token.
    async fn clear(&self) -> Result<()>;
}
