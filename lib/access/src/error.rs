//! Error types for the access crate.

use std::fmt;

/// Errors from decoding a bearer token's payload.
///
/// Every variant is treated as "expired" by the validator: ambiguity about
/// validity is never resolved in favor of granting access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token does not have the expected dot-separated segments.
    Malformed,
    /// The payload segment is not valid base64 or not valid JSON.
    InvalidPayload { reason: String },
    /// The payload decoded but carries no numeric `exp` claim.
    MissingExpiry,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "token is not a dot-separated credential"),
            Self::InvalidPayload { reason } => {
                write!(f, "token payload could not be decoded: {reason}")
            }
            Self::MissingExpiry => write!(f, "token carries no numeric 'exp' claim"),
        }
    }
}

impl std::error::Error for TokenError {}
