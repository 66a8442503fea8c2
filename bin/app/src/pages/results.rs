//! Exam results: checking for everyone, uploading for staff.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use slateboard_api::ApiClient;

#[derive(Debug, Clone, Deserialize)]
struct ExamResult {
    subject: String,
    marks: u32,
    #[serde(rename = "maxMarks")]
    max_marks: u32,
    grade: String,
}

#[component]
pub fn CheckResultsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (roll, set_roll) = signal(String::new());
    let (query, set_query) = signal(Option::<String>::None);

    let results = LocalResource::new(move || {
        let api = api.clone();
        let roll = query.get();
        async move {
            match roll {
                None => Ok(None),
                Some(roll) => api
                    .get_json::<Vec<ExamResult>>(&format!("/results/{roll}"))
                    .await
                    .map(Some),
            }
        }
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let roll = roll.get_untracked();
        if !roll.trim().is_empty() {
            set_query.set(Some(roll.trim().to_string()));
        }
    };

    view! {
        <section class="page">
            <h1>"Check Results"</h1>
            <form class="inline-form" on:submit=submit>
                <label>
                    "Roll number"
                    <input
                        type="text"
                        prop:value=roll
                        on:input=move |ev| set_roll.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Look up"</button>
            </form>
            {move || match results.get() {
                None | Some(Ok(None)) => ().into_any(),
                Some(Ok(Some(rows))) if rows.is_empty() => {
                    view! { <p>"No results found for that roll number."</p> }.into_any()
                }
                Some(Ok(Some(rows))) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Subject"</th>
                                <th>"Marks"</th>
                                <th>"Grade"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.subject}</td>
                                        <td>{format!("{}/{}", row.marks, row.max_marks)}</td>
                                        <td>{row.grade}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
                Some(Err(err)) if err.is_session_expired() => {
                    view! { <Redirect path="/signin"/> }.into_any()
                }
                Some(Err(_)) => {
                    view! { <p class="error">"Could not load results."</p> }.into_any()
                }
            }}
        </section>
    }
}

#[derive(Debug, Clone, Serialize)]
struct ResultUpload {
    #[serde(rename = "rollNumber")]
    roll_number: String,
    subject: String,
    marks: u32,
}

#[component]
pub fn UploadResultPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (roll, set_roll) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (marks, set_marks) = signal(String::new());
    let (status, set_status) = signal(Option::<String>::None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Ok(marks) = marks.get_untracked().trim().parse::<u32>() else {
            set_status.set(Some("Marks must be a whole number.".to_string()));
            return;
        };
        let upload = ResultUpload {
            roll_number: roll.get_untracked().trim().to_string(),
            subject: subject.get_untracked().trim().to_string(),
            marks,
        };
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.post_json::<_, serde_json::Value>("/results", &upload).await {
                Ok(_) => set_status.set(Some("Result uploaded.".to_string())),
                Err(err) if err.is_session_expired() => navigate("/signin", Default::default()),
                Err(_) => set_status.set(Some("Upload failed. Please try again.".to_string())),
            }
        });
    };

    view! {
        <section class="page">
            <h1>"Upload Result"</h1>
            {move || status.get().map(|message| view! { <p class="form-status">{message}</p> })}
            <form class="stacked-form" on:submit=submit>
                <label>
                    "Roll number"
                    <input
                        type="text"
                        prop:value=roll
                        on:input=move |ev| set_roll.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Subject"
                    <input
                        type="text"
                        prop:value=subject
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Marks"
                    <input
                        type="number"
                        prop:value=marks
                        on:input=move |ev| set_marks.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Upload"</button>
            </form>
        </section>
    }
}
