use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, state::STORE};

#[component]
pub fn Dashboard() -> Element {
    let (store_name, products, categories, pages, published) = {
        let data = STORE.read();
        (
            data.settings.name.clone(),
            data.products.len(),
            data.categories.len(),
            data.custom_pages.len(),
            data.published_pages().count(),
        )
    };

    rsx! {
        div { class: "container",
            div { class: "page-header",
                h1 { class: "section-title", "{store_name}" }
            }
            p { style: "color: var(--text-secondary); margin-bottom: var(--space-6);",
                "Configure your storefront, then publish it as a static site from the Publish tab."
            }

            div { class: "stat-row",
                div { class: "stat-card",
                    div { class: "stat-number", "{products}" }
                    div { class: "stat-caption", "Products" }
                }
                div { class: "stat-card",
                    div { class: "stat-number", "{categories}" }
                    div { class: "stat-caption", "Categories" }
                }
                div { class: "stat-card",
                    div { class: "stat-number", "{pages}" }
                    div { class: "stat-caption", "Custom pages ({published} published)" }
                }
            }

            div { class: "card",
                h2 { style: "margin-bottom: var(--space-3);", "Get started" }
                ol { style: "margin-left: var(--space-6); color: var(--text-secondary);",
                    li {
                        Link { to: Route::Settings {}, "Name your store and pick a theme" }
                    }
                    li {
                        Link { to: Route::Categories {}, "Create your categories" }
                    }
                    li {
                        Link { to: Route::Products {}, "Add products and flag the ones to feature" }
                    }
                    li {
                        Link { to: Route::Export {}, "Preview and download the generated site" }
                    }
                }
            }
        }
    }
}
