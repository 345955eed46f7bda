//! Errors surfaced by backend calls.
//!
//! Every variant owns plain strings so results can be cloned into UI state
//! and compared in tests.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {detail}")]
    Backend { status: u16, detail: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn backend(status: u16, detail: impl Into<String>) -> Self {
        Self::Backend {
            status,
            detail: detail.into(),
        }
    }

    /// Text shown to the user for a failed ride request.
    ///
    /// Backend failures show the backend's own wording verbatim.
    pub fn detail(&self) -> String {
        match self {
            Self::Backend { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}
