//! Sign-up page.
//!
//! Account creation is handled out of band by a tenant administrator;
//! this page only explains that and points back to sign-in.

use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-form">
                <h1>"Sign Up"</h1>
                <p>
                    "Accounts are created by your school's administrator. "
                    "Contact them to have one set up for you."
                </p>
                <p class="auth-switch">
                    "Already have an account? " <a href="/signin">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
