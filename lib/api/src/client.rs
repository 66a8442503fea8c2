//! The gateway client every authenticated request goes through.
//!
//! Mirrors a single configured HTTP instance with a request interceptor:
//! before transmission the stored token is liveness-checked, and an
//! expired token clears the session and rejects the request without
//! sending it. Callers receive a typed rejection, never a response.

use serde::Serialize;
use serde::de::DeserializeOwned;

use slateboard_access::{Session, token};
use slateboard_core::Tenant;

use crate::config::ApiConfig;
use crate::error::{ApiError, ErrorBody};

/// Headers the interceptor resolved for one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Bearer credential, present when a live token is stored.
    pub bearer: Option<String>,
    /// Tenant partition header, present whenever a tenant is stored.
    /// The login endpoint needs it before any token exists.
    pub tenant: Option<Tenant>,
}

impl AuthHeaders {
    fn apply(self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = self.bearer {
            request = request.bearer_auth(token);
        }
        if let Some(tenant) = self.tenant {
            request = request.header("tenant", tenant.as_str());
        }
        request
    }
}

/// REST gateway client with the injected session context.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Creates a gateway client over the given session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();

        // reqwest does not expose timeouts on wasm32; the browser's fetch
        // machinery applies its own limits there.
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

    /// Returns the session this client reads.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolves the headers for one outgoing request.
    ///
    /// This is the interceptor: a stored-but-expired token clears the
    /// session and rejects with [`ApiError::SessionExpired`] before any
    /// bytes leave the client. Re-reads the session on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] when the stored token is no
    /// longer live.
    pub fn auth_headers(&self) -> Result<AuthHeaders, ApiError> {
        let bearer = match self.session.token() {
            Some(token) if token::is_expired(&token) => {
                tracing::warn!("stored bearer token expired; clearing session");
                self.session.clear();
                return Err(ApiError::SessionExpired);
            }
            Some(token) => Some(token),
            None => None,
        };

        Ok(AuthHeaders {
            bearer,
            tenant: self.session.tenant(),
        })
    }

    /// Sends a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates interceptor rejections, transport failures, non-success
    /// statuses, and body decode failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let headers = self.auth_headers()?;
        tracing::debug!(path, "dispatching GET");
        let response = headers
            .apply(self.http.get(self.endpoint(path)))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Sends a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::get_json`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let headers = self.auth_headers()?;
        tracing::debug!(path, "dispatching POST");
        let response = headers
            .apply(self.http.post(self.endpoint(path)).json(body))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Sends a PUT request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::get_json`].
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let headers = self.auth_headers()?;
        tracing::debug!(path, "dispatching PUT");
        let response = headers
            .apply(self.http.put(self.endpoint(path)).json(body))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Sends a DELETE request, discarding any response body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::get_json`], minus body decoding.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        tracing::debug!(path, "dispatching DELETE");
        let response = headers
            .apply(self.http.delete(self.endpoint(path)))
            .send()
            .await
            .map_err(network_error)?;
        check_status(response).await.map(|_| ())
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network {
        reason: err.to_string(),
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use chrono::{Duration, Utc};
    use slateboard_access::{MemoryStore, SessionFields};
    use slateboard_core::Role;
    use std::sync::Arc;

    fn token_expiring_in(delta: Duration) -> String {
        let exp = (Utc::now() + delta).timestamp();
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#).as_bytes());
        format!("{header}.{body}.sig")
    }

    fn client_with_session() -> (ApiClient, Session) {
        let session = Session::new(Arc::new(MemoryStore::new()));
        let client =
            ApiClient::new(&ApiConfig::default(), session.clone()).expect("build client");
        (client, session)
    }

    fn establish(session: &Session, token: String) {
        session.establish(SessionFields {
            token,
            tenant: "school-123".into(),
            user_id: "EMP-1".into(),
            user_name: "Test User".to_string(),
            role: Role::Teacher,
        });
    }

    #[test]
    fn unauthenticated_request_carries_no_headers() {
        let (client, _session) = client_with_session();
        let headers = client.auth_headers().expect("no token is not an error");
        assert_eq!(headers.bearer, None);
        assert_eq!(headers.tenant, None);
    }

    #[test]
    fn live_token_yields_bearer_and_tenant() {
        let (client, session) = client_with_session();
        let token = token_expiring_in(Duration::hours(1));
        establish(&session, token.clone());

        let headers = client.auth_headers().expect("live token");
        assert_eq!(headers.bearer, Some(token));
        assert_eq!(headers.tenant, Some("school-123".into()));
    }

    #[test]
    fn expired_token_rejects_and_clears_session() {
        let (client, session) = client_with_session();
        establish(&session, token_expiring_in(Duration::hours(-1)));

        let err = client.auth_headers().expect_err("token is expired");
        assert_eq!(err, ApiError::SessionExpired);

        // Every field is gone, not just the token.
        assert_eq!(session.token(), None);
        assert_eq!(session.tenant(), None);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.user_name(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn malformed_token_is_treated_as_expired() {
        let (client, session) = client_with_session();
        establish(&session, "garbage".to_string());

        let err = client.auth_headers().expect_err("fail closed");
        assert_eq!(err, ApiError::SessionExpired);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn tenant_is_attached_without_a_token() {
        // The login endpoint is called with a tenant before any token
        // exists; the tenant header must not depend on the bearer.
        use slateboard_access::SessionStore as _;
        use slateboard_access::session::TENANT_KEY;

        let store = Arc::new(MemoryStore::new());
        store.set(TENANT_KEY, "school-123");
        let session = Session::new(store);
        let client = ApiClient::new(&ApiConfig::default(), session).expect("build client");

        let headers = client.auth_headers().expect("unauthenticated");
        assert_eq!(headers.bearer, None);
        assert_eq!(headers.tenant, Some("school-123".into()));
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let (client, _session) = client_with_session();
        assert_eq!(
            client.endpoint("/library/books"),
            "http://localhost:8080/api/library/books"
        );
        assert_eq!(
            client.endpoint("events"),
            "http://localhost:8080/api/events"
        );
    }
}
