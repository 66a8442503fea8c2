//! Route-guard component.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use slateboard_access::{RouteAccess, Session, evaluate};
use slateboard_core::{Role, RoleSet};

/// Wraps a protected view and decides, on every navigation, whether to
/// render it or redirect.
///
/// The decision re-reads the session each time the closure runs; nothing
/// is cached across route changes.
#[component]
pub fn Protected(
    /// Roles permitted to render the wrapped view.
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let required = RoleSet::of(allowed);

    move || match evaluate(&session, &required) {
        RouteAccess::Granted => children().into_any(),
        RouteAccess::SignInRequired => view! { <Redirect path="/signin"/> }.into_any(),
        RouteAccess::Forbidden => view! { <Redirect path="/unauthorized"/> }.into_any(),
    }
}
