//! Errors raised at the backend boundary.

use crate::api::models::ErrorBody;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Backend unreachable or the request could not be sent.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx status without a usable `detail`.
    #[error("backend returned status {status}")]
    Status { status: u16 },

    /// Non-2xx status carrying a `detail` message.
    #[error("{detail}")]
    Backend { status: u16, detail: String },
}

impl ApiError {
    /// Classify a non-2xx response from its raw body.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
            .map(|detail| detail.trim().to_string())
            .filter(|detail| !detail.is_empty());

        match detail {
            Some(detail) => Self::Backend { status, detail },
            None => Self::Status { status },
        }
    }

    /// True for failures that never produced a backend-authored message.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Backend { .. })
    }

    /// Message fit for a notification: the backend detail verbatim, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend { detail, .. } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}
