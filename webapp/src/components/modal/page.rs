use dioxus::prelude::*;

use store::{CustomPage, slug::slugify};

use crate::{
    components::modal::{ModalSize, ModernModal, close_modal, form_flag, form_value},
    state::{STORE, commit},
};

#[derive(Clone, PartialEq, Props)]
pub struct PageModalProps {
    page_id: Option<String>,
}

#[component]
pub fn PageModal(props: PageModalProps) -> Element {
    let editing = props.page_id.clone();
    let initial = editing
        .as_ref()
        .and_then(|id| {
            STORE
                .read()
                .custom_pages
                .iter()
                .find(|p| p.id == *id)
                .cloned()
        })
        .unwrap_or_default();

    let mut status_message = use_signal(String::new);
    let is_create = editing.is_none();

    let mut slug_signal = use_signal(|| initial.slug.clone());
    let mut slug_touched = use_signal(|| editing.is_some() && !initial.slug.is_empty());

    let submit_initial = initial.clone();
    let handle_submit = move |event: FormEvent| {
        let values = event.values();

        let title = form_value(&values, "title").trim().to_string();
        if title.is_empty() {
            status_message.set("Title is required".into());
            return;
        }
        let content = form_value(&values, "content");
        if content.trim().is_empty() {
            status_message.set("Content is required".into());
            return;
        }

        let mut page = if editing.is_some() {
            submit_initial.clone()
        } else {
            CustomPage::new(title.clone())
        };

        page.title = title;
        page.content = content;
        page.slug = match slug_signal().trim() {
            "" => slugify(&page.title),
            other => slugify(other),
        };
        let meta_title = form_value(&values, "meta_title");
        page.meta_title = (!meta_title.trim().is_empty()).then_some(meta_title);
        let meta_description = form_value(&values, "meta_description");
        page.meta_description = (!meta_description.trim().is_empty()).then_some(meta_description);
        page.is_published = form_flag(&values, "is_published");
        page.touch();

        let is_edit = editing.is_some();
        commit(move |data| {
            if is_edit {
                data.update_page(page.clone());
            } else {
                data.add_page(page.clone());
            }
        });
        close_modal();
    };

    let title = if props.page_id.is_some() {
        "Edit page"
    } else {
        "Add page"
    };

    rsx! {
        ModernModal { title, size: ModalSize::Large,
            form { onsubmit: handle_submit,
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Title" }
                        input {
                            class: "form-input",
                            name: "title",
                            r#type: "text",
                            value: "{initial.title}",
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
                }
                div { class: "form-group",
                    label { class: "form-label", "Content (HTML)" }
                    textarea {
                        class: "form-textarea",
                        name: "content",
                        style: "min-height: 220px; font-family: monospace;",
                        value: "{initial.content}",
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Meta title (optional)" }
                        input {
                            class: "form-input",
                            name: "meta_title",
                            r#type: "text",
                            value: initial.meta_title.clone().unwrap_or_default(),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Meta description (optional)" }
                        input {
                            class: "form-input",
                            name: "meta_description",
                            r#type: "text",
                            value: initial.meta_description.clone().unwrap_or_default(),
                        }
                    }
                }
                div { class: "form-check",
                    input {
                        r#type: "checkbox",
                        name: "is_published",
                        value: "true",
                        checked: initial.is_published || is_create,
                    }
                    label { "Published" }
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
                        button { class: "btn btn-primary", r#type: "submit", "Save page" }
                    }
                }
            }
        }
    }
}
