//! Alibaba Cloud provider error types

use nimbus_cloud::CloudError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlibabaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid gateway endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Alibaba Cloud API error [{code}]: {message}")]
    Api {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AlibabaError>;

impl From<AlibabaError> for CloudError {
    fn from(err: AlibabaError) -> Self {
        match err {
            AlibabaError::Http(e) if e.is_timeout() => CloudError::Timeout(e.to_string()),
            AlibabaError::Http(e) => CloudError::Transport(e.to_string()),
            AlibabaError::InvalidEndpoint(endpoint) => {
                CloudError::InvalidRequest(format!("invalid gateway endpoint: {}", endpoint))
            }
            AlibabaError::Api {
                code,
                message,
                request_id,
            } => CloudError::Api {
                code,
                message,
                request_id,
            },
            AlibabaError::JsonError(e) => CloudError::Json(e),
        }
    }
}
