//! Leave request submission.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde::Serialize;

use slateboard_api::ApiClient;

#[derive(Debug, Clone, Serialize)]
struct LeaveRequest {
    #[serde(rename = "fromDate")]
    from_date: String,
    #[serde(rename = "toDate")]
    to_date: String,
    reason: String,
}

#[component]
pub fn LeaveRequestPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (from_date, set_from_date) = signal(String::new());
    let (to_date, set_to_date) = signal(String::new());
    let (reason, set_reason) = signal(String::new());
    let (status, set_status) = signal(Option::<String>::None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = LeaveRequest {
            from_date: from_date.get_untracked(),
            to_date: to_date.get_untracked(),
            reason: reason.get_untracked().trim().to_string(),
        };
        if request.from_date.is_empty() || request.to_date.is_empty() {
            set_status.set(Some("Both dates are required.".to_string()));
            return;
        }
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api
                .post_json::<_, serde_json::Value>("/leave-requests", &request)
                .await
            {
                Ok(_) => set_status.set(Some("Leave request submitted.".to_string())),
                Err(err) if err.is_session_expired() => navigate("/signin", Default::default()),
                Err(_) => set_status.set(Some("Could not submit the request.".to_string())),
            }
        });
    };

    view! {
        <section class="page">
            <h1>"Leave Request"</h1>
            {move || status.get().map(|message| view! { <p class="form-status">{message}</p> })}
            <form class="stacked-form" on:submit=submit>
                <label>
                    "From"
                    <input
                        type="date"
                        prop:value=from_date
                        on:input=move |ev| set_from_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "To"
                    <input
                        type="date"
                        prop:value=to_date
                        on:input=move |ev| set_to_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Reason"
                    <textarea
                        prop:value=reason
                        on:input=move |ev| set_reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit">"Submit"</button>
            </form>
        </section>
    }
}
