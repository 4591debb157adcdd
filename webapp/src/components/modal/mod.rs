use std::collections::HashMap;

use dioxus::prelude::*;

mod category;
use category::CategoryModal;

mod link;
use link::LinkModal;

mod page;
use page::PageModal;

mod product;
use product::ProductModal;

// global modal signal
//
// a single stack rather than per-page modal state, so opening an editor from
// any manager (or a future cross-entity flow) works the same way everywhere
pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(|| Vec::new());

// Modal
//
// every create/edit box the builder can display; edit variants carry the
// target entity id and the form pre-fills from the aggregate
#[derive(Clone, PartialEq)]
pub enum Modal {
    CreateProduct,
    EditProduct(String),
    CreateCategory,
    EditCategory(String),
    CreatePage,
    EditPage(String),
    CreateLink,
    EditLink(String),
}

pub fn close_modal() {
    MODAL_STACK.with_mut(|v| {
        v.pop();
    });
}

#[component]
pub fn ModalBox() -> Element {
    match MODAL_STACK.read().last() {
        Some(modal) => match modal {
            Modal::CreateProduct => rsx! {
                ProductModal { product_id: None }
            },
            Modal::EditProduct(id) => rsx! {
                ProductModal { product_id: Some(id.clone()) }
            },
            Modal::CreateCategory => rsx! {
                CategoryModal { category_id: None }
            },
            Modal::EditCategory(id) => rsx! {
                CategoryModal { category_id: Some(id.clone()) }
            },
            Modal::CreatePage => rsx! {
                PageModal { page_id: None }
            },
            Modal::EditPage(id) => rsx! {
                PageModal { page_id: Some(id.clone()) }
            },
            Modal::CreateLink => rsx! {
                LinkModal { link_id: None }
            },
            Modal::EditLink(id) => rsx! {
                LinkModal { link_id: Some(id.clone()) }
            },
        },
        None => rsx! {},
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    size: ModalSize,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[derive(Clone, PartialEq)]
pub enum ModalSize {
    Small,
    Medium,
    Large,
}

impl Default for ModalSize {
    fn default() -> Self {
        ModalSize::Medium
    }
}

#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let width = match props.size {
        ModalSize::Small => "max-width: 400px;",
        ModalSize::Medium => "max-width: 600px;",
        ModalSize::Large => "max-width: 800px;",
    };

    rsx! {
        div {
            class: "modal-overlay",
            // clicking the backdrop discards in-progress form state
            onclick: move |evt| {
                evt.stop_propagation();
                close_modal();
            },
            div {
                class: "modal-content",
                style: "{width}",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button { class: "btn-close", onclick: move |_| close_modal(), "×" }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div {
                        class: "modal-footer",
                        style: "display: flex; align-items: center; justify-content: space-between; gap: var(--space-4);",
                        {footer.clone()}
                    }
                }
            }
        }
    }
}

// form harvesting helpers shared by the entity modals

pub fn form_value(values: &HashMap<String, FormValue>, key: &str) -> String {
    match values.get(key) {
        Some(val) => val.as_value(),
        None => String::new(),
    }
}

/// Checkbox semantics: absent means unchecked.
pub fn form_flag(values: &HashMap<String, FormValue>, key: &str) -> bool {
    match values.get(key) {
        Some(val) => {
            let val = val.as_value();
            val == "true" || val == "on"
        }
        None => false,
    }
}

pub fn form_f64(values: &HashMap<String, FormValue>, key: &str) -> Option<f64> {
    form_value(values, key).trim().parse().ok()
}

pub fn form_i32(values: &HashMap<String, FormValue>, key: &str) -> i32 {
    form_value(values, key).trim().parse().unwrap_or(0)
}
