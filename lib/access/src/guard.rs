//! Route-guard decision logic.
//!
//! Every protected route declares the role set allowed to see it. The
//! guard reads the session at each navigation and resolves to exactly one
//! of three outcomes; there is no cached or undefined state.

use slateboard_core::RoleSet;

use crate::session::Session;

/// Outcome of a route-guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session holds a token and a role inside the required set.
    Granted,
    /// No token in the session; the user must sign in first.
    SignInRequired,
    /// Token present but the role is absent or outside the required set.
    Forbidden,
}

/// Decides whether a route requiring `allowed` may render.
///
/// Re-reads the session on every call; the role can only change through a
/// fresh login, but the guard does not assume statefulness. The attempted
/// destination is not preserved across a forced sign-in; after login the
/// user lands on the default view.
#[must_use]
pub fn evaluate(session: &Session, allowed: &RoleSet) -> RouteAccess {
    if !session.is_authenticated() {
        return RouteAccess::SignInRequired;
    }

    match session.role() {
        Some(role) if allowed.contains(&role) => RouteAccess::Granted,
        _ => RouteAccess::Forbidden,
    }
}
