use dioxus::prelude::*;

use crate::{
    common::storage::try_local_storage,
    components::{
        modal::{MODAL_STACK, Modal, ModalBox},
        search_bar::SearchBar,
    },
    state::{STORE, commit},
};

pub const PRODUCT_SEARCH_KEY: &str = "product_search";

#[component]
pub fn Products() -> Element {
    let search_signal = use_signal::<String>(|| try_local_storage(PRODUCT_SEARCH_KEY));

    let filter = search_signal().to_lowercase();
    let products: Vec<store::Product> = STORE
        .read()
        .products
        .iter()
        .filter(|p| {
            filter.is_empty()
                || p.name.to_lowercase().contains(&filter)
                || p.category.to_lowercase().contains(&filter)
        })
        .cloned()
        .collect();

    let total = STORE.read().products.len();
    let status = if filter.is_empty() {
        format!("{total} products")
    } else {
        format!("{} of {total} products", products.len())
    };

    let action_button = rsx! {
        div { style: "margin-left: auto;",
            button {
                class: "btn btn-primary",
                onclick: move |_| MODAL_STACK.with_mut(|v| v.push(Modal::CreateProduct)),
                "Add product"
            }
        }
    };

    rsx! {
        div { class: "container",
            ModalBox {}

            div { class: "page-header",
                h1 { class: "section-title", "Products" }
            }

            SearchBar {
                search_signal,
                storage_key: PRODUCT_SEARCH_KEY,
                placeholder: "Search by name or category...",
                status,
                action_button,
            }

            if products.is_empty() {
                div { class: "empty-state card",
                    if filter.is_empty() {
                        "No products yet. Add your first product to get started."
                    } else {
                        "No products match your search."
                    }
                }
            } else {
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "" }
                                th { "Name" }
                                th { "Category" }
                                th { "Price" }
                                th { "Flags" }
                                th { "" }
                            }
                        }
                        tbody {
                            for product in products {
                                tr { key: "{product.id}",
                                    td {
                                        if product.image.is_empty() {
                                            div { class: "entity-thumb" }
                                        } else {
                                            img { class: "entity-thumb", src: "{product.image}" }
                                        }
                                    }
                                    td { "{product.name}" }
                                    td { "{product.category}" }
                                    td {
                                        "{product.display_price()}"
                                        if let Some(original) = product.original_price {
                                            span {
                                                style: "color: var(--text-tertiary); text-decoration: line-through; margin-left: var(--space-2); font-size: 0.8rem;",
                                                "{original:.2}"
                                            }
                                        }
                                    }
                                    td {
                                        if product.is_featured {
                                            span { class: "tag-chip", "featured" }
                                        }
                                        if product.is_best_seller {
                                            span { class: "tag-chip", "best seller" }
                                        }
                                        if product.is_on_sale {
                                            span { class: "tag-chip", "sale" }
                                        }
                                    }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-secondary btn-sm",
                                                onclick: {
                                                    let id = product.id.clone();
                                                    move |_| MODAL_STACK.with_mut(|v| v.push(Modal::EditProduct(id.clone())))
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let id = product.id.clone();
                                                    // deletion is immediate; the backup path is the undo
                                                    move |_| commit(|data| data.remove_product(&id))
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
