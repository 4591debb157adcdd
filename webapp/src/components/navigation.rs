use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::local_time,
    state::{LAST_SAVED_AT, save_now},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let saved_caption = match *LAST_SAVED_AT.read() {
        Some(at) => format!("Saved {}", local_time(at)),
        None => String::from("Not saved yet"),
    };

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Dashboard {}, style: "display: flex; align-items: center;",
                        span { style: "font-weight: 600; font-size: 1.25rem;", "Shopsmith" }
                    }
                }

                nav { class: "nav-links",
                    NavBarButton { name: "Products".to_owned(), target: Route::Products {} }
                    NavBarButton { name: "Categories".to_owned(), target: Route::Categories {} }
                    NavBarButton { name: "Pages".to_owned(), target: Route::Pages {} }
                    NavBarButton { name: "Navigation".to_owned(), target: Route::Navigation {} }
                    NavBarButton { name: "Settings".to_owned(), target: Route::Settings {} }
                    NavBarButton { name: "Publish".to_owned(), target: Route::Export {} }
                }

                div { style: "display: flex; align-items: center; gap: var(--space-3);",
                    span { class: "save-indicator", "{saved_caption}" }
                    button {
                        class: "btn btn-secondary btn-sm",
                        onclick: move |_| save_now(),
                        "Save now"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
