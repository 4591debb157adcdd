use dioxus::prelude::*;

use store::{Category, slug::slugify};

use crate::{
    components::modal::{ModalSize, ModernModal, close_modal, form_flag, form_i32, form_value},
    state::{STORE, commit},
};

#[derive(Clone, PartialEq, Props)]
pub struct CategoryModalProps {
    category_id: Option<String>,
}

#[component]
pub fn CategoryModal(props: CategoryModalProps) -> Element {
    let editing = props.category_id.clone();
    let initial = editing
        .as_ref()
        .and_then(|id| {
            STORE
                .read()
                .categories
                .iter()
                .find(|c| c.id == *id)
                .cloned()
        })
        .unwrap_or_default();

    let mut status_message = use_signal(String::new);
    let is_create = editing.is_none();

    // slug mirrors the name until the admin touches it
    let mut slug_signal = use_signal(|| initial.slug.clone());
    let mut slug_touched = use_signal(|| editing.is_some() && !initial.slug.is_empty());

    let submit_initial = initial.clone();
    let handle_submit = move |event: FormEvent| {
        let values = event.values();

        let name = form_value(&values, "name").trim().to_string();
        if name.is_empty() {
            status_message.set("Name is required".into());
            return;
        }

        let mut category = if editing.is_some() {
            submit_initial.clone()
        } else {
            Category::new(name.clone())
        };

        category.name = name;
        category.description = form_value(&values, "description");
        category.image = form_value(&values, "image");
        category.slug = match slug_signal().trim() {
            "" => slugify(&category.name),
            other => slugify(other),
        };
        category.is_visible = form_flag(&values, "is_visible");
        category.order = form_i32(&values, "order");
        category.touch();

        let is_edit = editing.is_some();
        commit(move |data| {
            if is_edit {
                data.update_category(category.clone());
            } else {
                data.add_category(category.clone());
            }
        });
        close_modal();
    };

    let title = if props.category_id.is_some() {
        "Edit category"
    } else {
        "Add category"
    };

    rsx! {
        ModernModal { title, size: ModalSize::Medium,
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { class: "form-label", "Name" }
                    input {
                        class: "form-input",
                        name: "name",
                        r#type: "text",
                        value: "{initial.name}",
                        oninput: move |evt| {
                            if !slug_touched() {
                                slug_signal.set(slugify(&evt.value()));
                            }
                        },
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Slug" }
                    input {
                        class: "form-input",
                        name: "slug",
                        r#type: "text",
                        value: "{slug_signal()}",
                        oninput: move |evt| {
                            slug_touched.set(true);
                            slug_signal.set(evt.value());
                        },
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Description" }
                    textarea {
                        class: "form-textarea",
                        name: "description",
                        value: "{initial.description}",
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Image URL" }
                        input {
                            class: "form-input",
                            name: "image",
                            r#type: "text",
                            value: "{initial.image}",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Display order" }
                        input {
                            class: "form-input",
                            name: "order",
                            r#type: "number",
                            value: "{initial.order}",
                        }
                    }
                }
                div { class: "form-check",
                    input {
                        r#type: "checkbox",
                        name: "is_visible",
                        value: "true",
                        checked: initial.is_visible || is_create,
                    }
                    label { "Visible on the storefront" }
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
                        button { class: "btn btn-primary", r#type: "submit", "Save category" }
                    }
                }
            }
        }
    }
}
