//! The signed-in user's profile, read straight from the session.

use leptos::prelude::*;

use slateboard_access::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();

    let name = {
        let session = session.clone();
        move || session.user_name().unwrap_or_else(|| "Guest".to_string())
    };
    let user_id = {
        let session = session.clone();
        move || {
            session
                .user_id()
                .map_or_else(|| "-".to_string(), |id| id.to_string())
        }
    };
    let role = {
        let session = session.clone();
        move || {
            session
                .role()
                .map_or_else(|| "-".to_string(), |role| role.to_string())
        }
    };
    let tenant = move || {
        session
            .tenant()
            .map_or_else(|| "-".to_string(), |tenant| tenant.to_string())
    };

    view! {
        <section class="page">
            <h1>"User Profile"</h1>
            <dl class="profile-fields">
                <dt>"Name"</dt>
                <dd>{name}</dd>
                <dt>"User ID"</dt>
                <dd>{user_id}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
                <dt>"Tenant"</dt>
                <dd>{tenant}</dd>
            </dl>
        </section>
    }
}
