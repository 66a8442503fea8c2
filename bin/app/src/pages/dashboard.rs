//! Dashboard landing page.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use serde::Deserialize;

use slateboard_access::Session;
use slateboard_api::ApiClient;

#[derive(Debug, Clone, Deserialize)]
struct Announcement {
    title: String,
    body: String,
    #[serde(rename = "postedOn")]
    posted_on: String,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();

    let greeting = move || {
        let name = session.user_name().unwrap_or_else(|| "there".to_string());
        format!("Welcome back, {name}")
    };

    let announcements = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_json::<Vec<Announcement>>("/announcements").await }
    });

    view! {
        <section class="page">
            <h1>{greeting}</h1>
            <h2>"Announcements"</h2>
            {move || match announcements.get() {
                None => view! { <p>"Loading announcements..."</p> }.into_any(),
                Some(Ok(items)) if items.is_empty() => {
                    view! { <p>"No announcements right now."</p> }.into_any()
                }
                Some(Ok(items)) => view! {
                    <ul class="announcements">
                        {items
                            .into_iter()
                            .map(|a| view! {
                                <li>
                                    <h3>{a.title}</h3>
                                    <p>{a.body}</p>
                                    <span class="posted-on">{a.posted_on}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
                Some(Err(err)) if err.is_session_expired() => {
                    view! { <Redirect path="/signin"/> }.into_any()
                }
                Some(Err(_)) => {
                    view! { <p class="error">"Could not load announcements."</p> }.into_any()
                }
            }}
        </section>
    }
}
