use dioxus::prelude::*;

use crate::{
    common::{local_time, storage::try_local_storage},
    components::{
        modal::{MODAL_STACK, Modal, ModalBox},
        search_bar::SearchBar,
    },
    state::{STORE, commit},
};

pub const PAGE_SEARCH_KEY: &str = "page_search";

#[component]
pub fn Pages() -> Element {
    let search_signal = use_signal::<String>(|| try_local_storage(PAGE_SEARCH_KEY));

    let filter = search_signal().to_lowercase();
    let pages: Vec<store::CustomPage> = STORE
        .read()
        .custom_pages
        .iter()
        .filter(|p| filter.is_empty() || p.title.to_lowercase().contains(&filter))
        .cloned()
        .collect();

    let status = format!("{} pages", pages.len());

    let action_button = rsx! {
        div { style: "margin-left: auto;",
            button {
                class: "btn btn-primary",
                onclick: move |_| MODAL_STACK.with_mut(|v| v.push(Modal::CreatePage)),
                "Add page"
            }
        }
    };

    rsx! {
        div { class: "container",
            ModalBox {}

            div { class: "page-header",
                h1 { class: "section-title", "Custom pages" }
            }

            SearchBar {
                search_signal,
                storage_key: PAGE_SEARCH_KEY,
                placeholder: "Search pages...",
                status,
                action_button,
            }

            if pages.is_empty() {
                div { class: "empty-state card",
                    "No custom pages yet. Add shipping terms, a contact page, anything."
                }
            } else {
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Title" }
                                th { "Slug" }
                                th { "Status" }
                                th { "Updated" }
                                th { "" }
                            }
                        }
                        tbody {
                            for page in pages {
                                tr { key: "{page.id}",
                                    td { "{page.title}" }
                                    td {
                                        code { style: "font-size: 0.85rem;", "{page.slug}.html" }
                                    }
                                    td {
                                        if page.is_published {
                                            span { style: "color: var(--success);", "Published" }
                                        } else {
                                            span { style: "color: var(--text-tertiary);", "Draft" }
                                        }
                                    }
                                    td { "{local_time(page.updated_at)}" }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-secondary btn-sm",
                                                onclick: {
                                                    let id = page.id.clone();
                                                    move |_| MODAL_STACK.with_mut(|v| v.push(Modal::EditPage(id.clone())))
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let id = page.id.clone();
                                                    move |_| commit(|data| data.remove_page(&id))
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
