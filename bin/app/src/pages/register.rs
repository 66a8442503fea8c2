//! Registration: enrolling students, hiring teachers, and the student
//! roll. Teacher registration is admin-only; the route guard and the
//! sidebar both enforce that.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use slateboard_api::ApiClient;

#[derive(Debug, Clone, Serialize)]
struct NewStudent {
    name: String,
    class: String,
    #[serde(rename = "guardianName")]
    guardian_name: String,
    email: String,
}

#[component]
pub fn StudentFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (class, set_class) = signal(String::new());
    let (guardian, set_guardian) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(Option::<String>::None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let student = NewStudent {
            name: name.get_untracked().trim().to_string(),
            class: class.get_untracked().trim().to_string(),
            guardian_name: guardian.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
        };
        if student.name.is_empty() {
            set_status.set(Some("Name is required.".to_string()));
            return;
        }
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api
                .post_json::<_, serde_json::Value>("/students", &student)
                .await
            {
                Ok(_) => set_status.set(Some("Student registered.".to_string())),
                Err(err) if err.is_session_expired() => navigate("/signin", Default::default()),
                Err(_) => set_status.set(Some("Could not register the student.".to_string())),
            }
        });
    };

    view! {
        <section class="page">
            <h1>"Add Student"</h1>
            {move || status.get().map(|message| view! { <p class="form-status">{message}</p> })}
            <form class="stacked-form" on:submit=submit>
                <label>
                    "Full name"
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Class"
                    <input
                        type="text"
                        prop:value=class
                        on:input=move |ev| set_class.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Guardian name"
                    <input
                        type="text"
                        prop:value=guardian
                        on:input=move |ev| set_guardian.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Register"</button>
            </form>
        </section>
    }
}

#[derive(Debug, Clone, Serialize)]
struct NewTeacher {
    name: String,
    subject: String,
    email: String,
}

#[component]
pub fn TeacherFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(Option::<String>::None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let teacher = NewTeacher {
            name: name.get_untracked().trim().to_string(),
            subject: subject.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
        };
        if teacher.name.is_empty() {
            set_status.set(Some("Name is required.".to_string()));
            return;
        }
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api
                .post_json::<_, serde_json::Value>("/teachers", &teacher)
                .await
            {
                Ok(_) => set_status.set(Some("Teacher registered.".to_string())),
                Err(err) if err.is_session_expired() => navigate("/signin", Default::default()),
                Err(_) => set_status.set(Some("Could not register the teacher.".to_string())),
            }
        });
    };

    view! {
        <section class="page">
            <h1>"Add Teacher"</h1>
            {move || status.get().map(|message| view! { <p class="form-status">{message}</p> })}
            <form class="stacked-form" on:submit=submit>
                <label>
                    "Full name"
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
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
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Register"</button>
            </form>
        </section>
    }
}

#[derive(Debug, Clone, Deserialize)]
struct StudentRow {
    #[serde(rename = "rollNumber")]
    roll_number: String,
    name: String,
    class: String,
}

#[component]
pub fn StudentListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let students = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_json::<Vec<StudentRow>>("/students").await }
    });

    view! {
        <section class="page">
            <h1>"Student List"</h1>
            {move || match students.get() {
                None => view! { <p>"Loading students..."</p> }.into_any(),
                Some(Ok(rows)) if rows.is_empty() => {
                    view! { <p>"No students are registered yet."</p> }.into_any()
                }
                Some(Ok(rows)) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Roll number"</th>
                                <th>"Name"</th>
                                <th>"Class"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.roll_number}</td>
                                        <td>{row.name}</td>
                                        <td>{row.class}</td>
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
                    view! { <p class="error">"Could not load students."</p> }.into_any()
                }
            }}
        </section>
    }
}
