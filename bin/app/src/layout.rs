//! Application shell: sidebar, header, and the routed content area.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use slateboard_access::Session;
use slateboard_api::AuthService;
use slateboard_nav::{NavItem, filter_nav};

use crate::nav;

/// Layout wrapper for every in-app route.
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-main">
                <Header/>
                <main class="app-content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Header with the signed-in user's name and a sign-out action.
#[component]
fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = expect_context::<AuthService>();
    let navigate = use_navigate();

    let display_name = {
        let session = session.clone();
        move || session.user_name().unwrap_or_else(|| "Guest".to_string())
    };

    let sign_out = move |_| {
        auth.sign_out();
        navigate("/signin", Default::default());
    };

    view! {
        <header class="app-header">
            <a href="/" class="logo">"slateboard"</a>
            <div class="header-right">
                <span class="user-name">{display_name}</span>
                {move || {
                    session
                        .is_authenticated()
                        .then(|| view! {
                            <button class="sign-out" on:click=sign_out.clone()>"Sign out"</button>
                        })
                }}
            </div>
        </header>
    }
}

/// Sidebar whose entries are resolved from the static tree by role.
///
/// The filter runs inside the reactive closure, so the menu is recomputed
/// from the session on every render rather than captured once.
#[component]
fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();
    let (open_group, set_open_group) = signal(Option::<String>::None);

    view! {
        <aside class="app-sidebar">
            <nav>
                <h2 class="menu-heading">"Menu"</h2>
                {
                    let session = session.clone();
                    move || {
                        let role = session.role();
                        let items = filter_nav(&nav::main_nav(), role.as_ref());
                        render_items(items, open_group, set_open_group)
                    }
                }
                <h2 class="menu-heading">"Others"</h2>
                {move || {
                    let role = session.role();
                    let items = filter_nav(&nav::others_nav(), role.as_ref());
                    render_items(items, open_group, set_open_group)
                }}
            </nav>
        </aside>
    }
}

fn render_items(
    items: Vec<NavItem>,
    open_group: ReadSignal<Option<String>>,
    set_open_group: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <ul class="menu">
            {items
                .into_iter()
                .map(|item| render_item(item, open_group, set_open_group))
                .collect_view()}
        </ul>
    }
}

fn render_item(
    item: NavItem,
    open_group: ReadSignal<Option<String>>,
    set_open_group: WriteSignal<Option<String>>,
) -> impl IntoView {
    let icon_class = format!("icon icon-{}", item.icon);

    match (item.path, item.sub_items) {
        (_, Some(subs)) => {
            let name = item.name.clone();
            let toggle_name = item.name.clone();
            let is_open =
                move || open_group.get().as_deref() == Some(name.as_str());
            let toggle = move |_| {
                set_open_group.update(|open| {
                    if open.as_deref() == Some(toggle_name.as_str()) {
                        *open = None;
                    } else {
                        *open = Some(toggle_name.clone());
                    }
                });
            };

            view! {
                <li class="menu-item menu-group">
                    <button class="menu-toggle" on:click=toggle>
                        <span class=icon_class></span>
                        {item.name.clone()}
                    </button>
                    <ul class="submenu" class:open=is_open>
                        {subs
                            .into_iter()
                            .map(|sub| view! {
                                <li class="submenu-item">
                                    <A href=sub.path>{sub.name}</A>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </li>
            }
            .into_any()
        }
        (Some(path), None) => view! {
            <li class="menu-item">
                <A href=path>
                    <span class=icon_class></span>
                    {item.name}
                </A>
            </li>
        }
        .into_any(),
        // A nav entry with neither path nor children renders nothing.
        (None, None) => ().into_any(),
    }
}
