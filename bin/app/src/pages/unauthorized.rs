//! Shown when a signed-in user reaches a route their role does not allow.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Access denied"</h1>
            <p>"Your role does not have access to this page."</p>
            <a href="/">"Back to dashboard"</a>
        </div>
    }
}
