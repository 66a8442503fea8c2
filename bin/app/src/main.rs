//! slateboard browser client entry point.

#![allow(non_snake_case)]

mod app;
mod guard;
mod layout;
mod nav;
mod pages;
mod routes;
mod storage;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
