//! School calendar.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use serde::Deserialize;

use slateboard_api::ApiClient;

#[derive(Debug, Clone, Deserialize)]
struct CalendarEvent {
    title: String,
    date: String,
    #[serde(default)]
    description: Option<String>,
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let events = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_json::<Vec<CalendarEvent>>("/events").await }
    });

    view! {
        <section class="page">
            <h1>"Calendar"</h1>
            {move || match events.get() {
                None => view! { <p>"Loading events..."</p> }.into_any(),
                Some(Ok(items)) if items.is_empty() => {
                    view! { <p>"No upcoming events."</p> }.into_any()
                }
                Some(Ok(items)) => view! {
                    <ul class="events">
                        {items
                            .into_iter()
                            .map(|event| view! {
                                <li>
                                    <span class="event-date">{event.date}</span>
                                    <strong>{event.title}</strong>
                                    {event
                                        .description
                                        .map(|text| view! { <p>{text}</p> })}
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
                    view! { <p class="error">"Could not load events."</p> }.into_any()
                }
            }}
        </section>
    }
}
