use dioxus::prelude::*;

use store::LinkType;

use crate::{
    components::modal::{MODAL_STACK, Modal, ModalBox},
    state::{STORE, commit},
};

fn type_caption(link_type: &LinkType) -> &'static str {
    match link_type {
        LinkType::Anchor => "Section anchor",
        LinkType::External => "External URL",
        LinkType::Page => "Custom page",
        LinkType::Category => "Category",
    }
}

#[component]
pub fn Navigation() -> Element {
    let links: Vec<(store::LinkItem, &'static str, String)> = {
        let data = STORE.read();
        let mut list = data.nav_links.clone();
        list.sort_by_key(|l| l.order);
        list.into_iter()
            .map(|l| {
                let caption = type_caption(&l.link_type);
                let href = l.href();
                (l, caption, href)
            })
            .collect()
    };

    rsx! {
        div { class: "container",
            ModalBox {}

            div { class: "page-header",
                h1 { class: "section-title", "Navigation links" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| MODAL_STACK.with_mut(|v| v.push(Modal::CreateLink)),
                    "Add link"
                }
            }

            p { style: "color: var(--text-tertiary); margin-bottom: var(--space-4);",
                "These links appear in the generated header and footer, in display order."
            }

            if links.is_empty() {
                div { class: "empty-state card", "No navigation links configured." }
            } else {
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Text" }
                                th { "Type" }
                                th { "Target" }
                                th { "Order" }
                                th { "Visible" }
                                th { "" }
                            }
                        }
                        tbody {
                            for (link , caption , href) in links {
                                tr { key: "{link.id}",
                                    td { "{link.text}" }
                                    td { "{caption}" }
                                    td {
                                        code { style: "font-size: 0.85rem;", "{href}" }
                                    }
                                    td { "{link.order}" }
                                    td {
                                        if link.is_visible {
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
                                                    let id = link.id.clone();
                                                    move |_| MODAL_STACK.with_mut(|v| v.push(Modal::EditLink(id.clone())))
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let id = link.id.clone();
                                                    move |_| commit(|data| data.remove_link(&id))
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
