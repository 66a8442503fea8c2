//! Error types for the gateway client.

use serde::Deserialize;
use std::fmt;

/// Errors from requests made through the gateway client.
///
/// `SessionExpired` is the only failure this layer injects itself; every
/// other variant propagates a transport or server condition unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    Client { reason: String },
    /// The stored bearer token was expired; the session has been cleared
    /// and the request was never sent.
    SessionExpired,
    /// The request could not be completed (DNS, connect, timeout).
    Network { reason: String },
    /// The server answered with a non-success status.
    Status { status: u16, message: Option<String> },
    /// The response body could not be decoded as the expected type.
    Decode { reason: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client { reason } => write!(f, "failed to build HTTP client: {reason}"),
            Self::SessionExpired => write!(f, "session expired; please sign in again"),
            Self::Network { reason } => write!(f, "request failed: {reason}"),
            Self::Status { status, message } => match message {
                Some(message) => write!(f, "server returned {status}: {message}"),
                None => write!(f, "server returned {status}"),
            },
            Self::Decode { reason } => write!(f, "failed to decode response: {reason}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true if the caller should route the user back to sign-in.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

/// Optional `{message}` body servers attach to failure responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expired_display_prompts_reauth() {
        let err = ApiError::SessionExpired;
        assert!(err.to_string().contains("sign in again"));
        assert!(err.is_session_expired());
    }

    #[test]
    fn status_display_includes_server_message() {
        let err = ApiError::Status {
            status: 403,
            message: Some("tenant mismatch".to_string()),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("tenant mismatch"));
    }

    #[test]
    fn status_display_without_message() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned 500");
    }

    #[test]
    fn network_error_is_not_session_expired() {
        let err = ApiError::Network {
            reason: "connection refused".to_string(),
        };
        assert!(!err.is_session_expired());
    }
}
