//! Credential exchange and session establishment.
//!
//! The login call deliberately bypasses the gateway interceptor: it is
//! the one request that must go out without a bearer token, and its
//! tenant comes from the form rather than the session. On success all
//! five session fields are populated in one step.

use serde::{Deserialize, Serialize};
use std::fmt;

use slateboard_access::{Session, SessionFields};
use slateboard_core::{Role, UserId};

use crate::config::ApiConfig;
use crate::error::{ApiError, ErrorBody};

/// Credentials submitted to the authentication endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Success payload of the authentication endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for every subsequent request.
    #[serde(rename = "jwt")]
    pub token: String,
    /// Role tag driving route and menu visibility.
    pub role: Role,
    /// Display name for the header.
    pub name: String,
    /// Server-issued user identifier.
    #[serde(rename = "empId")]
    pub user_id: UserId,
}

/// Errors from the sign-in flow.
///
/// Local validation and server rejection are distinct paths and must not
/// collapse into one generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// No tenant was selected; no network call was made.
    TenantRequired,
    /// The server rejected the credentials, optionally with a message.
    Rejected { message: Option<String> },
    /// The request never completed.
    Network { reason: String },
    /// The success payload could not be decoded.
    Decode { reason: String },
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TenantRequired => write!(f, "Please select a tenant."),
            Self::Rejected { message } => match message {
                Some(message) => write!(f, "{message}"),
                None => write!(f, "Login failed. Please try again."),
            },
            Self::Network { .. } | Self::Decode { .. } => {
                write!(f, "Login failed. Please try again.")
            }
        }
    }
}

impl std::error::Error for LoginError {}

/// Rejects an empty or whitespace-only tenant before any network call.
///
/// # Errors
///
/// Returns [`LoginError::TenantRequired`] for a blank tenant.
pub fn require_tenant(tenant: &str) -> Result<&str, LoginError> {
    let tenant = tenant.trim();
    if tenant.is_empty() {
        return Err(LoginError::TenantRequired);
    }
    Ok(tenant)
}

/// The login flow: collects tenant plus credentials and populates the
/// session on success.
#[derive(Debug, Clone)]
pub struct AuthService {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl AuthService {
    /// Creates the login service over the given session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_seconds));

        let http = builder.build().map_err(|e| ApiError::Client {
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Exchanges credentials for a token and establishes the session.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::TenantRequired`] without touching the
    /// network when the tenant is blank; otherwise surfaces rejection,
    /// transport, or decode failures. The session is only written on
    /// success, and atomically.
    pub async fn sign_in(
        &self,
        tenant: &str,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, LoginError> {
        let tenant = require_tenant(tenant)?;

        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .header("tenant", tenant)
            .json(&credentials)
            .send()
            .await
            .map_err(|e| LoginError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            tracing::debug!(status = status.as_u16(), "credential exchange rejected");
            return Err(LoginError::Rejected { message });
        }

        let body: LoginResponse = response.json().await.map_err(|e| LoginError::Decode {
            reason: e.to_string(),
        })?;

        self.session.establish(SessionFields {
            token: body.token.clone(),
            tenant: tenant.into(),
            user_id: body.user_id.clone(),
            user_name: body.name.clone(),
            role: body.role.clone(),
        });
        tracing::debug!(role = %body.role, "session established");

        Ok(body)
    }

    /// Clears the session; the caller routes back to sign-in.
    pub fn sign_out(&self) {
        self.session.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slateboard_access::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn blank_tenant_is_rejected_locally() {
        assert_eq!(require_tenant(""), Err(LoginError::TenantRequired));
        assert_eq!(require_tenant("   "), Err(LoginError::TenantRequired));
    }

    #[test]
    fn tenant_is_trimmed() {
        assert_eq!(require_tenant(" school-123 "), Ok("school-123"));
    }

    #[test]
    fn tenant_required_message_names_the_field() {
        assert_eq!(
            LoginError::TenantRequired.to_string(),
            "Please select a tenant."
        );
    }

    #[test]
    fn rejection_prefers_the_server_message() {
        let err = LoginError::Rejected {
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn rejection_without_message_is_generic() {
        let err = LoginError::Rejected { message: None };
        assert_eq!(err.to_string(), "Login failed. Please try again.");
    }

    #[test]
    fn login_response_uses_server_field_names() {
        let body = r#"{"jwt":"a.b.c","role":"teacher","name":"A. Teacher","empId":"EMP-7"}"#;
        let parsed: LoginResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(parsed.token, "a.b.c");
        assert_eq!(parsed.role, Role::Teacher);
        assert_eq!(parsed.user_id, UserId::new("EMP-7"));
    }

    #[test]
    fn sign_out_clears_the_session() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        session.establish(SessionFields {
            token: "a.b.c".to_string(),
            tenant: "school-123".into(),
            user_id: "EMP-7".into(),
            user_name: "A. Teacher".to_string(),
            role: Role::Teacher,
        });
        let service =
            AuthService::new(&ApiConfig::default(), session.clone()).expect("build service");
        service.sign_out();
        assert!(!session.is_authenticated());
    }
}
