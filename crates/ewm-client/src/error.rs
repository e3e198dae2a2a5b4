//! API Errors
//!
//! Failure taxonomy for calls to the backend. Local form validation is
//! not represented here: it never reaches the transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response reached the client
    #[error("network failure: {0}")]
    Network(String),
    /// Non-2xx response with whatever error body the backend sent
    #[error("backend returned {status}: {}", payload.summary())]
    Backend { status: u16, payload: ErrorPayload },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
    /// The backend exposes no endpoint for this operation
    #[error("{0} is not supported by the backend")]
    Unsupported(&'static str),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Error body produced by the backend's exception handler.
///
/// Every field is optional so that proxies returning HTML or plain text
/// still yield a payload; in that case the raw text lands in `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorPayload {
    pub status: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub errors: Vec<String>,
    pub timestamp: Option<String>,
}

impl ErrorPayload {
    pub fn parse(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        serde_json::from_str(trimmed).unwrap_or_else(|_| Self {
            message: Some(trimmed.to_string()),
            ..Self::default()
        })
    }

    /// One-line description for logs
    pub fn summary(&self) -> String {
        match (&self.reason, &self.message) {
            (Some(reason), Some(message)) => format!("{reason}: {message}"),
            (None, Some(message)) => message.clone(),
            (Some(reason), None) => reason.clone(),
            (None, None) => "no details".to_string(),
        }
    }
}
