use dioxus::prelude::*;

use store::{LinkItem, LinkType};

use crate::{
    components::modal::{ModalSize, ModernModal, close_modal, form_flag, form_i32, form_value},
    state::{STORE, commit},
};

fn link_type_from_form(value: &str) -> LinkType {
    match value {
        "external" => LinkType::External,
        "page" => LinkType::Page,
        "category" => LinkType::Category,
        _ => LinkType::Anchor,
    }
}

fn link_type_key(link_type: &LinkType) -> &'static str {
    match link_type {
        LinkType::Anchor => "anchor",
        LinkType::External => "external",
        LinkType::Page => "page",
        LinkType::Category => "category",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LinkModalProps {
    link_id: Option<String>,
}

#[component]
pub fn LinkModal(props: LinkModalProps) -> Element {
    let editing = props.link_id.clone();
    let initial = editing
        .as_ref()
        .and_then(|id| {
            STORE
                .read()
                .nav_links
                .iter()
                .find(|l| l.id == *id)
                .cloned()
        })
        .unwrap_or_default();

    let mut status_message = use_signal(String::new);
    let is_create = editing.is_none();
    let initial_type = link_type_key(&initial.link_type);

    let submit_initial = initial.clone();
    let handle_submit = move |event: FormEvent| {
        let values = event.values();

        let text = form_value(&values, "text").trim().to_string();
        let url = form_value(&values, "url").trim().to_string();
        if text.is_empty() || url.is_empty() {
            status_message.set("Text and target are required".into());
            return;
        }

        let link_type = link_type_from_form(&form_value(&values, "link_type"));
        let mut link = if editing.is_some() {
            submit_initial.clone()
        } else {
            LinkItem::new(text.clone(), url.clone(), link_type.clone())
        };

        link.text = text;
        link.url = url;
        link.link_type = link_type;
        link.is_visible = form_flag(&values, "is_visible");
        link.order = form_i32(&values, "order");

        let is_edit = editing.is_some();
        commit(move |data| {
            if is_edit {
                data.update_link(link.clone());
            } else {
                data.add_link(link.clone());
            }
        });
        close_modal();
    };

    let title = if props.link_id.is_some() {
        "Edit link"
    } else {
        "Add link"
    };

    rsx! {
        ModernModal { title, size: ModalSize::Medium,
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { class: "form-label", "Text" }
                    input {
                        class: "form-input",
                        name: "text",
                        r#type: "text",
                        value: "{initial.text}",
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Type" }
                        select { class: "form-select", name: "link_type",
                            option { value: "anchor", selected: initial_type == "anchor", "Section anchor" }
                            option { value: "external", selected: initial_type == "external", "External URL" }
                            option { value: "page", selected: initial_type == "page", "Custom page (slug)" }
                            option { value: "category", selected: initial_type == "category", "Category (slug)" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Target" }
                        input {
                            class: "form-input",
                            name: "url",
                            r#type: "text",
                            placeholder: "#about, https://..., or a slug",
                            value: "{initial.url}",
                        }
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Display order" }
                        input {
                            class: "form-input",
                            name: "order",
                            r#type: "number",
                            value: "{initial.order}",
                        }
                    }
                    div { class: "form-check", style: "margin-top: var(--space-6);",
                        input {
                            r#type: "checkbox",
                            name: "is_visible",
                            value: "true",
                            checked: initial.is_visible || is_create,
                        }
                        label { "Visible" }
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between; gap: var(--space-4); margin-top: var(--space-4);",
                    span { class: "status-message", style: "color: var(--error);", "{status_message}" }
                    div { style: "display: flex; gap: var(--space-2);",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| close_modal(),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Save link" }
                    }
                }
            }
        }
    }
}
