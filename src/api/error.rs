//! Error types for the SmartVAS API client.
//!
//! Every transport or status failure is normalized into one variant here and
//! classified once, so the screens only ever map variants to user-facing
//! text.

use thiserror::Error;

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend knows no user for the given phone number (HTTP 404).
    #[error("user not found")]
    NotFound,

    /// The phone number is already registered.
    ///
    /// The backend signals this with a generic HTTP 500; the mapping is kept
    /// for compatibility even though a 409 would be the honest status.
    #[error("phone number already registered")]
    Conflict,

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The backend answered with an unexpected status.
    #[error("backend returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The request never completed (DNS, connect, TLS, mid-body failures).
    #[error("connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered 2xx with a body we could not decode.
    #[error("invalid response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => ApiError::NotFound,
            500 => ApiError::Conflict,
            _ => ApiError::Status { status, message },
        }
    }

    /// Classify a reqwest transport failure.
    pub fn from_transport(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout
        } else if source.is_decode() {
            ApiError::Decode { source }
        } else {
            ApiError::Connection { source }
        }
    }

    /// Server-provided message, when one was present in the error body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether retrying the same request can succeed without user edits.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Timeout | ApiError::Connection { .. } | ApiError::Status { .. }
        )
    }
}
