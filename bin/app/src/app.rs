//! Main application component and routing.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use slateboard_access::Session;
use slateboard_api::{ApiClient, ApiConfig, AuthService};

use crate::guard::Protected;
use crate::layout::AppLayout;
use crate::pages;
use crate::routes::{ADMIN_ONLY, EVERYONE, STAFF};
use crate::storage::BrowserStore;

/// The root component: wires the session, gateway client, and login
/// service into context, then declares the route surface.
///
/// Each guarded route names its required role set from `routes`; the
/// guard re-evaluates the session on every navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(Arc::new(BrowserStore::new()));
    let config = ApiConfig::default();
    let api = ApiClient::new(&config, session.clone()).expect("failed to build gateway client");
    let auth = AuthService::new(&config, session.clone()).expect("failed to build login service");

    provide_context(session);
    provide_context(api);
    provide_context(auth);

    view! {
        <Title text="slateboard"/>
        <Router>
            <Routes fallback=pages::NotFoundPage>
                <ParentRoute path=path!("") view=AppLayout>
                    <Route path=path!("/") view=|| view! {
                        <Protected allowed=EVERYONE>
                            <pages::DashboardPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/calendar") view=pages::CalendarPage/>
                    <Route path=path!("/profile") view=pages::ProfilePage/>
                    <Route path=path!("/results/check") view=|| view! {
                        <Protected allowed=EVERYONE>
                            <pages::CheckResultsPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/results/upload") view=|| view! {
                        <Protected allowed=STAFF>
                            <pages::UploadResultPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/attendance/teachers") view=|| view! {
                        <Protected allowed=STAFF>
                            <pages::TeacherAttendancePage/>
                        </Protected>
                    }/>
                    <Route path=path!("/attendance/students") view=|| view! {
                        <Protected allowed=STAFF>
                            <pages::StudentAttendancePage/>
                        </Protected>
                    }/>
                    <Route path=path!("/attendance/summary") view=|| view! {
                        <Protected allowed=STAFF>
                            <pages::AttendanceSummaryPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/leave-request") view=|| view! {
                        <Protected allowed=EVERYONE>
                            <pages::LeaveRequestPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/library/issue") view=|| view! {
                        <Protected allowed=EVERYONE>
                            <pages::IssueBooksPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/library/view") view=|| view! {
                        <Protected allowed=EVERYONE>
                            <pages::ViewBooksPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/library/add") view=|| view! {
                        <Protected allowed=STAFF>
                            <pages::AddBookPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/library/books") view=|| view! {
                        <Protected allowed=EVERYONE>
                            <pages::BookListPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/syllabus") view=|| view! {
                        <Protected allowed=EVERYONE>
                            <pages::SyllabusPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/register/student") view=|| view! {
                        <Protected allowed=STAFF>
                            <pages::StudentFormPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/register/teacher") view=|| view! {
                        <Protected allowed=ADMIN_ONLY>
                            <pages::TeacherFormPage/>
                        </Protected>
                    }/>
                    <Route path=path!("/register/students") view=|| view! {
                        <Protected allowed=STAFF>
                            <pages::StudentListPage/>
                        </Protected>
                    }/>
                </ParentRoute>
                <Route path=path!("/signin") view=pages::SignInPage/>
                <Route path=path!("/signup") view=pages::SignUpPage/>
                <Route path=path!("/unauthorized") view=pages::UnauthorizedPage/>
            </Routes>
        </Router>
    }
}
