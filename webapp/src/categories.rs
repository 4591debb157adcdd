use dioxus::prelude::*;

use crate::{
    common::storage::try_local_storage,
    components::{
        modal::{MODAL_STACK, Modal, ModalBox},
        search_bar::SearchBar,
    },
    state::{STORE, commit},
};

pub const CATEGORY_SEARCH_KEY: &str = "category_search";

#[component]
pub fn Categories() -> Element {
    let search_signal = use_signal::<String>(|| try_local_storage(CATEGORY_SEARCH_KEY));

    let filter = search_signal().to_lowercase();
    // rows carry the product count, computed against the loose name join
    let categories: Vec<(store::Category, usize)> = {
        let data = STORE.read();
        let mut list: Vec<store::Category> = data
            .categories
            .iter()
            .filter(|c| filter.is_empty() || c.name.to_lowercase().contains(&filter))
            .cloned()
            .collect();
        list.sort_by_key(|c| c.order);
        list.into_iter()
            .map(|c| {
                let count = data.product_count_in(&c.name);
                (c, count)
            })
            .collect()
    };

    let status = format!("{} categories", categories.len());

    let action_button = rsx! {
        div { style: "margin-left: auto;",
            button {
                class: "btn btn-primary",
                onclick: move |_| MODAL_STACK.with_mut(|v| v.push(Modal::CreateCategory)),
                "Add category"
            }
        }
    };

    rsx! {
        div { class: "container",
            ModalBox {}

            div { class: "page-header",
                h1 { class: "section-title", "Categories" }
            }

            SearchBar {
                search_signal,
                storage_key: CATEGORY_SEARCH_KEY,
                placeholder: "Search categories...",
                status,
                action_button,
            }

            if categories.is_empty() {
                div { class: "empty-state card", "No categories yet." }
            } else {
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Slug" }
                                th { "Products" }
                                th { "Order" }
                                th { "Visible" }
                                th { "" }
                            }
                        }
                        tbody {
                            for (category , product_count) in categories {
                                tr { key: "{category.id}",
                                    td { "{category.name}" }
                                    td {
                                        code { style: "font-size: 0.85rem;", "{category.slug}" }
                                    }
                                    // renaming a category orphans its products;
                                    // this count dropping to zero is the tell
                                    td { "{product_count}" }
                                    td { "{category.order}" }
                                    td {
                                        if category.is_visible {
                                            "Yes"
                                        } else {
                                            span { style: "color: var(--text-tertiary);", "No" }
                                        }
                                    }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-secondary btn-sm",
                                                onclick: {
                                                    let id = category.id.clone();
                                                    move |_| MODAL_STACK.with_mut(|v| v.push(Modal::EditCategory(id.clone())))
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let id = category.id.clone();
                                                    move |_| commit(|data| data.remove_category(&id))
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
