//! Library: issuing, returns overview, catalogue, and (for staff) adding
//! new books.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use slateboard_api::ApiClient;

#[derive(Debug, Clone, Serialize)]
struct IssueRequest {
    #[serde(rename = "bookId")]
    book_id: String,
    #[serde(rename = "memberId")]
    member_id: String,
}

#[component]
pub fn IssueBooksPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (book_id, set_book_id) = signal(String::new());
    let (member_id, set_member_id) = signal(String::new());
    let (status, set_status) = signal(Option::<String>::None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = IssueRequest {
            book_id: book_id.get_untracked().trim().to_string(),
            member_id: member_id.get_untracked().trim().to_string(),
        };
        if request.book_id.is_empty() || request.member_id.is_empty() {
            set_status.set(Some("Both book and member are required.".to_string()));
            return;
        }
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api
                .post_json::<_, serde_json::Value>("/library/issue", &request)
                .await
            {
                Ok(_) => set_status.set(Some("Book issued.".to_string())),
                Err(err) if err.is_session_expired() => navigate("/signin", Default::default()),
                Err(_) => set_status.set(Some("Could not issue the book.".to_string())),
            }
        });
    };

    view! {
        <section class="page">
            <h1>"Issue books"</h1>
            {move || status.get().map(|message| view! { <p class="form-status">{message}</p> })}
            <form class="stacked-form" on:submit=submit>
                <label>
                    "Book ID"
                    <input
                        type="text"
                        prop:value=book_id
                        on:input=move |ev| set_book_id.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Member ID"
                    <input
                        type="text"
                        prop:value=member_id
                        on:input=move |ev| set_member_id.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Issue"</button>
            </form>
        </section>
    }
}

#[derive(Debug, Clone, Deserialize)]
struct IssuedBook {
    title: String,
    #[serde(rename = "memberName")]
    member_name: String,
    #[serde(rename = "dueDate")]
    due_date: String,
}

#[component]
pub fn ViewBooksPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let issued = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_json::<Vec<IssuedBook>>("/library/issued").await }
    });

    view! {
        <section class="page">
            <h1>"View books"</h1>
            {move || match issued.get() {
                None => view! { <p>"Loading issued books..."</p> }.into_any(),
                Some(Ok(rows)) if rows.is_empty() => {
                    view! { <p>"No books are currently issued."</p> }.into_any()
                }
                Some(Ok(rows)) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Issued to"</th>
                                <th>"Due"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.title}</td>
                                        <td>{row.member_name}</td>
                                        <td>{row.due_date}</td>
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
                    view! { <p class="error">"Could not load issued books."</p> }.into_any()
                }
            }}
        </section>
    }
}

#[derive(Debug, Clone, Serialize)]
struct NewBook {
    title: String,
    author: String,
    copies: u32,
}

#[component]
pub fn AddBookPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (title, set_title) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (copies, set_copies) = signal(String::new());
    let (status, set_status) = signal(Option::<String>::None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Ok(copies) = copies.get_untracked().trim().parse::<u32>() else {
            set_status.set(Some("Copies must be a whole number.".to_string()));
            return;
        };
        let book = NewBook {
            title: title.get_untracked().trim().to_string(),
            author: author.get_untracked().trim().to_string(),
            copies,
        };
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api
                .post_json::<_, serde_json::Value>("/library/books", &book)
                .await
            {
                Ok(_) => set_status.set(Some("Book added to the catalogue.".to_string())),
                Err(err) if err.is_session_expired() => navigate("/signin", Default::default()),
                Err(_) => set_status.set(Some("Could not add the book.".to_string())),
            }
        });
    };

    view! {
        <section class="page">
            <h1>"Add books"</h1>
            {move || status.get().map(|message| view! { <p class="form-status">{message}</p> })}
            <form class="stacked-form" on:submit=submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=title
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Author"
                    <input
                        type="text"
                        prop:value=author
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Copies"
                    <input
                        type="number"
                        prop:value=copies
                        on:input=move |ev| set_copies.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Add book"</button>
            </form>
        </section>
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogueBook {
    title: String,
    author: String,
    available: u32,
}

#[component]
pub fn BookListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let books = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_json::<Vec<CatalogueBook>>("/library/books").await }
    });

    view! {
        <section class="page">
            <h1>"Books list"</h1>
            {move || match books.get() {
                None => view! { <p>"Loading catalogue..."</p> }.into_any(),
                Some(Ok(rows)) if rows.is_empty() => {
                    view! { <p>"The catalogue is empty."</p> }.into_any()
                }
                Some(Ok(rows)) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Author"</th>
                                <th>"Available"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.title}</td>
                                        <td>{row.author}</td>
                                        <td>{row.available}</td>
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
                    view! { <p class="error">"Could not load the catalogue."</p> }.into_any()
                }
            }}
        </section>
    }
}
