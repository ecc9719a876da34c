//! Failure taxonomy for outbound API calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages display these via `Display`, so every variant's message must read
//! as user-facing text. A 401 on a bearer-authenticated request becomes
//! `SessionExpired`, which the session store treats as a forced logout; a
//! 401 on a login/register call stays an ordinary `Status` error so forms
//! can show the credential failure verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors surfaced by the HTTP client adapter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection reset, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The request exceeded the fixed client-side timeout.
    #[error("request timed out")]
    Timeout,
    /// A non-2xx response from the API, message taken from the body.
    #[error("{message}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Server-supplied message, or a generic fallback.
        message: String,
    },
    /// A 401 on a bearer-authenticated request: the token is no longer valid.
    #[error("session expired")]
    SessionExpired,
    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// SSR stub result; these endpoints only exist in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether this error must invalidate the current session.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::SessionExpired => Some(401),
            _ => None,
        }
    }
}
