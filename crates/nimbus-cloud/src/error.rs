//! Cloud provider error types

use thiserror::Error;

/// Cloud provider errors
///
/// Every vendor adapter converts its own failures into this type so callers
/// see one contract regardless of which provider served the request.
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("API error [{code}]: {message}")]
    Api {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("Vendor rejected request: {0}")]
    Business(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CloudError {
    /// Whether retrying the whole operation may succeed.
    ///
    /// Providers never retry internally; this only tells callers which
    /// failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CloudError::Transport(_) | CloudError::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;
