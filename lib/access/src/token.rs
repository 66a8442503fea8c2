//! Bearer-token expiry checking.
//!
//! The client decodes the token's payload segment to read its `exp` claim
//! and nothing more. No signature verification happens here; this is a UX
//! check that keeps the UI from firing requests the server would reject
//! anyway. The server remains the security boundary.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};

use crate::error::TokenError;

/// The claims the client reads from a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claims {
    /// Expiry instant as epoch seconds.
    pub expires_at: i64,
}

impl Claims {
    /// Decodes the payload segment of a dot-separated bearer token.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] when the token has no payload segment,
    /// the segment is not base64/JSON, or the decoded payload carries no
    /// numeric `exp` claim.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let payload = token.split('.').nth(1).ok_or(TokenError::Malformed)?;

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| TokenError::InvalidPayload {
                reason: e.to_string(),
            })?;

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| TokenError::InvalidPayload {
                reason: e.to_string(),
            })?;

        let expires_at = value
            .get("exp")
            .and_then(serde_json::Value::as_i64)
            .ok_or(TokenError::MissingExpiry)?;

        Ok(Self { expires_at })
    }

    /// Returns true unless the expiry claim is strictly after `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now.timestamp()
    }
}

/// Returns true if the token is expired, undecodable, or missing its
/// expiry claim.
///
/// Malformed tokens are treated identically to expired ones: both block
/// further use (fail-closed).
#[must_use]
pub fn is_expired(token: &str) -> bool {
    match Claims::decode(token) {
        Ok(claims) => claims.is_expired_at(Utc::now()),
        Err(err) => {
            tracing::debug!(error = %err, "treating undecodable token as expired");
            true
        }
    }
}
