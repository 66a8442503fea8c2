//! Fallback for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <a href="/">"Back to dashboard"</a>
        </div>
    }
}
