//! Sign-in page.
//!
//! Tenant selection plus credentials. A blank tenant is caught locally
//! and never reaches the network; server rejection surfaces the server's
//! message when one is present.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use slateboard_api::AuthService;

const TENANTS: &[(&str, &str)] = &[
    ("UHF", "UHF"),
    ("school-123", "School 123"),
    ("college-abc", "College ABC"),
    ("org-xyz", "Org XYZ"),
];

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let navigate = use_navigate();

    let (tenant, set_tenant) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let auth = auth.clone();
        let navigate = navigate.clone();
        set_error.set(None);
        set_pending.set(true);
        leptos::task::spawn_local(async move {
            let result = auth
                .sign_in(
                    &tenant.get_untracked(),
                    &username.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
            set_pending.set(false);
            match result {
                Ok(_) => navigate("/", Default::default()),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Sign In"</h1>
                <p class="auth-hint">"Enter your tenant and credentials to sign in."</p>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
                <label>
                    "Tenant"
                    <select
                        prop:value=tenant
                        on:change=move |ev| set_tenant.set(event_target_value(&ev))
                    >
                        <option value="">"Select a tenant"</option>
                        {TENANTS
                            .iter()
                            .map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=pending>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-switch">
                    "No account yet? " <a href="/signup">"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
