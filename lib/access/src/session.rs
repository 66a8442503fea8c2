//! The authenticated session context.
//!
//! A `Session` wraps a [`SessionStore`] with typed accessors for the five
//! fields the backend hands out at login. It is created once at startup
//! and injected into the route guard, the API gateway client, and the
//! navigation layer; those consumers are read-only. Only the login flow
//! establishes a session, and only logout or expired-token cleanup clears
//! one.

use std::fmt;
use std::sync::Arc;

use slateboard_core::{Role, Tenant, UserId};

use crate::store::SessionStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the tenant partition identifier.
pub const TENANT_KEY: &str = "tenant";
/// Storage key for the user identifier.
pub const USER_ID_KEY: &str = "userId";
/// Storage key for the user's display name.
pub const USER_NAME_KEY: &str = "userName";
/// Storage key for the user's role tag.
pub const USER_ROLE_KEY: &str = "userRole";

/// The full set of fields written when a session is established.
///
/// Grouping them forces callers to populate the session atomically: a
/// token is never stored without its role, tenant, and identity metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFields {
    /// Bearer token returned by the authentication endpoint.
    pub token: String,
    /// Tenant the credentials were exchanged under.
    pub tenant: Tenant,
    /// Server-issued user identifier.
    pub user_id: UserId,
    /// Display name for the UI header.
    pub user_name: String,
    /// Role tag driving every gating decision.
    pub role: Role,
}

/// Handle to the current tab's session.
///
/// Cheap to clone; all clones share the same underlying store. Accessors
/// re-read the store on every call, so a handler resuming after an await
/// observes clears performed by another in-flight request's interceptor.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Creates a session context over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the bearer token, if one is stored.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Returns the tenant partition identifier, if present.
    #[must_use]
    pub fn tenant(&self) -> Option<Tenant> {
        self.store.get(TENANT_KEY).map(Tenant::from)
    }

    /// Returns the user identifier, if present.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.store.get(USER_ID_KEY).map(UserId::from)
    }

    /// Returns the user's display name, if present.
    #[must_use]
    pub fn user_name(&self) -> Option<String> {
        self.store.get(USER_NAME_KEY)
    }

    /// Returns the user's role tag, if present.
    ///
    /// A missing role with a present token is not an error; it simply
    /// fails every role check.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.store.get(USER_ROLE_KEY).map(|s| Role::from(s.as_str()))
    }

    /// Returns true if a token is stored.
    ///
    /// The token is present if and only if the user is considered
    /// authenticated; liveness is checked separately by the API client.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Populates all session fields from a successful login.
    pub fn establish(&self, fields: SessionFields) {
        self.store.set(TOKEN_KEY, &fields.token);
        self.store.set(TENANT_KEY, fields.tenant.as_str());
        self.store.set(USER_ID_KEY, fields.user_id.as_str());
        self.store.set(USER_NAME_KEY, &fields.user_name);
        self.store.set(USER_ROLE_KEY, fields.role.as_str());
    }

    /// Removes every session field.
    ///
    /// Called on logout and when an expired token is detected.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(TENANT_KEY);
        self.store.remove(USER_ID_KEY);
        self.store.remove(USER_NAME_KEY);
        self.store.remove(USER_ROLE_KEY);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("role", &self.role())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn test_session() -> Session {
        Session::new(Arc::new(MemoryStore::new()))
    }

    fn test_fields() -> SessionFields {
        SessionFields {
            token: "header.payload.sig".to_string(),
            tenant: "school-123".into(),
            user_id: "EMP-42".into(),
            user_name: "R. Feynman".to_string(),
            role: Role::Teacher,
        }
    }

    #[test]
    fn fresh_session_is_unauthenticated() {
        let session = test_session();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn establish_populates_all_fields() {
        let session = test_session();
        session.establish(test_fields());

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("header.payload.sig".to_string()));
        assert_eq!(session.tenant(), Some("school-123".into()));
        assert_eq!(session.user_id(), Some("EMP-42".into()));
        assert_eq!(session.user_name(), Some("R. Feynman".to_string()));
        assert_eq!(session.role(), Some(Role::Teacher));
    }

    #[test]
    fn clear_removes_every_field() {
        let session = test_session();
        session.establish(test_fields());
        session.clear();

        assert_eq!(session.token(), None);
        assert_eq!(session.tenant(), None);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.user_name(), None);
        assert_eq!(session.role(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn establish_is_idempotent_for_final_state() {
        let session = test_session();
        session.establish(test_fields());
        session.establish(test_fields());
        assert_eq!(session.role(), Some(Role::Teacher));
    }

    #[test]
    fn clones_share_the_store() {
        let session = test_session();
        let view = session.clone();
        session.establish(test_fields());
        assert!(view.is_authenticated());
        view.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn unknown_role_tag_survives_storage() {
        let session = test_session();
        let mut fields = test_fields();
        fields.role = Role::Other("registrar".to_string());
        session.establish(fields);
        assert_eq!(session.role(), Some(Role::Other("registrar".to_string())));
    }
}
