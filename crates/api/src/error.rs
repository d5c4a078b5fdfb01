//! API error types.

use gymhealth_core::RecordId;
use gymhealth_storage::StorageError;

/// Error type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the progress API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No stored access token
    #[error("No stored access token, log in first")]
    MissingCredential,

    /// Credential store failed
    #[error("Credential storage error: {0}")]
    Storage(#[from] StorageError),

    /// Transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status
    #[error("Server returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Record absent
    #[error("Progress record {0} not found")]
    NotFound(RecordId),

    /// Response body had an unexpected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Coarse classification, used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No credential available
    Authentication,
    /// Request failed or returned garbage
    Network,
    /// Requested record absent
    NotFound,
}

impl ApiError {
    /// Which of the three failure classes this error belongs to.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::MissingCredential | ApiError::Storage(_) => ApiErrorKind::Authentication,
            ApiError::Status { status: 401 | 403, .. } => ApiErrorKind::Authentication,
            ApiError::NotFound(_) => ApiErrorKind::NotFound,
            ApiError::Http(_) | ApiError::Status { .. } | ApiError::Decode(_) => ApiErrorKind::Network,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
