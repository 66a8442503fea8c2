//! Per-class syllabus overview.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use serde::Deserialize;

use slateboard_api::ApiClient;

#[derive(Debug, Clone, Deserialize)]
struct ClassSyllabus {
    class: String,
    subjects: Vec<String>,
}

#[component]
pub fn SyllabusPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let syllabus = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_json::<Vec<ClassSyllabus>>("/syllabus").await }
    });

    view! {
        <section class="page">
            <h1>"Syllabus"</h1>
            {move || match syllabus.get() {
                None => view! { <p>"Loading syllabus..."</p> }.into_any(),
                Some(Ok(rows)) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Class"</th>
                                <th>"Subjects"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.class}</td>
                                        <td>{row.subjects.join(", ")}</td>
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
                    view! { <p class="error">"Could not load the syllabus."</p> }.into_any()
                }
            }}
        </section>
    }
}
