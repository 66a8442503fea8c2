//! Attendance sheets and the attendance summary. Staff only; the route
//! guard enforces that before these components ever render.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use slateboard_api::ApiClient;

#[derive(Debug, Clone, Deserialize)]
struct RosterEntry {
    id: String,
    name: String,
}

#[derive(Debug, Clone, Serialize)]
struct AttendanceRecord {
    id: String,
    present: bool,
}

#[component]
pub fn TeacherAttendancePage() -> impl IntoView {
    view! {
        <AttendanceSheet
            title="Teacher Attendance"
            roster_path="/attendance/teachers/roster"
            submit_path="/attendance/teachers"
        />
    }
}

#[component]
pub fn StudentAttendancePage() -> impl IntoView {
    view! {
        <AttendanceSheet
            title="Student Attendance"
            roster_path="/attendance/students/roster"
            submit_path="/attendance/students"
        />
    }
}

/// One attendance sheet: loads a roster, tracks present/absent toggles,
/// and submits the marked records in one request.
#[component]
fn AttendanceSheet(
    title: &'static str,
    roster_path: &'static str,
    submit_path: &'static str,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (absent, set_absent) = signal(Vec::<String>::new());
    let (status, set_status) = signal(Option::<String>::None);

    let roster = {
        let api = api.clone();
        LocalResource::new(move || {
            let api = api.clone();
            async move { api.get_json::<Vec<RosterEntry>>(roster_path).await }
        })
    };

    let toggle = move |id: String| {
        set_absent.update(|absent| {
            if let Some(pos) = absent.iter().position(|a| *a == id) {
                absent.remove(pos);
            } else {
                absent.push(id);
            }
        });
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(entries)) = roster.get_untracked() else {
            return;
        };
        let marked = absent.get_untracked();
        let records: Vec<AttendanceRecord> = entries
            .iter()
            .map(|entry| AttendanceRecord {
                id: entry.id.clone(),
                present: !marked.contains(&entry.id),
            })
            .collect();
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api
                .post_json::<_, serde_json::Value>(submit_path, &records)
                .await
            {
                Ok(_) => set_status.set(Some("Attendance recorded.".to_string())),
                Err(err) if err.is_session_expired() => navigate("/signin", Default::default()),
                Err(_) => {
                    set_status.set(Some("Could not record attendance. Please try again.".to_string()))
                }
            }
        });
    };

    view! {
        <section class="page">
            <h1>{title}</h1>
            {move || status.get().map(|message| view! { <p class="form-status">{message}</p> })}
            <form on:submit=submit>
                {move || match roster.get() {
                    None => view! { <p>"Loading roster..."</p> }.into_any(),
                    Some(Ok(entries)) => view! {
                        <ul class="roster">
                            {entries
                                .into_iter()
                                .map(|entry| {
                                    let id = entry.id.clone();
                                    let checked = {
                                        let id = entry.id.clone();
                                        move || !absent.get().contains(&id)
                                    };
                                    view! {
                                        <li>
                                            <label>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    on:change=move |_| toggle(id.clone())
                                                />
                                                {entry.name}
                                            </label>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <button type="submit">"Record attendance"</button>
                    }
                    .into_any(),
                    Some(Err(err)) if err.is_session_expired() => {
                        view! { <Redirect path="/signin"/> }.into_any()
                    }
                    Some(Err(_)) => {
                        view! { <p class="error">"Could not load the roster."</p> }.into_any()
                    }
                }}
            </form>
        </section>
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AttendanceSummaryRow {
    name: String,
    #[serde(rename = "daysPresent")]
    days_present: u32,
    #[serde(rename = "daysTotal")]
    days_total: u32,
}

#[component]
pub fn AttendanceSummaryPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let summary = LocalResource::new(move || {
        let api = api.clone();
        async move {
            api.get_json::<Vec<AttendanceSummaryRow>>("/attendance/summary")
                .await
        }
    });

    view! {
        <section class="page">
            <h1>"Attendance Summary"</h1>
            {move || match summary.get() {
                None => view! { <p>"Loading summary..."</p> }.into_any(),
                Some(Ok(rows)) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Present"</th>
                                <th>"Attendance"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let percent = if row.days_total == 0 {
                                        0
                                    } else {
                                        row.days_present * 100 / row.days_total
                                    };
                                    view! {
                                        <tr>
                                            <td>{row.name}</td>
                                            <td>{format!("{}/{}", row.days_present, row.days_total)}</td>
                                            <td>{format!("{percent}%")}</td>
                                        </tr>
                                    }
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
                    view! { <p class="error">"Could not load the summary."</p> }.into_any()
                }
            }}
        </section>
    }
}
