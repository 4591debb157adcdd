use base64::{Engine as _, engine::general_purpose::STANDARD};
use dioxus::prelude::*;

use store::Product;

use crate::{
    components::modal::{ModalSize, ModernModal, close_modal, form_f64, form_flag, form_value},
    state::{STORE, commit},
};

#[derive(Clone, PartialEq, Props)]
pub struct ProductModalProps {
    /// None creates, Some(id) edits.
    product_id: Option<String>,
}

#[component]
pub fn ProductModal(props: ProductModalProps) -> Element {
    let editing = props.product_id.clone();
    let initial = editing
        .as_ref()
        .and_then(|id| STORE.read().products.iter().find(|p| p.id == *id).cloned())
        .unwrap_or_default();

    let mut status_message = use_signal(String::new);
    // the image field mixes typed URLs with uploaded files, so it is the one
    // controlled input in the form
    let mut image_signal = use_signal(|| initial.image.clone());

    let category_names: Vec<String> = STORE
        .read()
        .categories
        .iter()
        .map(|c| c.name.clone())
        .collect();

    let submit_initial = initial.clone();
    let handle_submit = move |event: FormEvent| {
        let values = event.values();

        let name = form_value(&values, "name").trim().to_string();
        if name.is_empty() {
            status_message.set("Name is required".into());
            return;
        }
        let price = match form_f64(&values, "price") {
            Some(price) if price >= 0.0 => price,
            _ => {
                status_message.set("A valid price is required".into());
                return;
            }
        };

        let mut product = if let Some(id) = &editing {
            // keep id (and anything a newer build may add) from the original
            let mut product = submit_initial.clone();
            product.id = id.clone();
            product
        } else {
            Product::new(name.clone(), price)
        };

        product.name = name;
        product.price = price;
        product.description = form_value(&values, "description");
        product.image = image_signal();
        product.category = form_value(&values, "category");
        product.original_price = form_f64(&values, "original_price");
        product.discount_percentage = form_value(&values, "discount_percentage")
            .trim()
            .parse()
            .ok();
        product.is_featured = form_flag(&values, "is_featured");
        product.is_best_seller = form_flag(&values, "is_best_seller");
        product.is_on_sale = form_flag(&values, "is_on_sale");
        product.tags = form_value(&values, "tags")
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let is_edit = editing.is_some();
        commit(move |data| {
            if is_edit {
                data.update_product(product.clone());
            } else {
                data.add_product(product.clone());
            }
        });
        close_modal();
    };

    let handle_upload = move |evt: FormEvent| async move {
        if let Some(engine) = evt.files() {
            for name in engine.files() {
                if let Some(bytes) = engine.read_file(&name).await {
                    let mime = mime_guess::from_path(&name).first_or_octet_stream();
                    image_signal.set(format!("data:{mime};base64,{}", STANDARD.encode(&bytes)));
                }
            }
        }
    };

    let title = if props.product_id.is_some() {
        "Edit product"
    } else {
        "Add product"
    };

    rsx! {
        ModernModal { title, size: ModalSize::Large,
            form { id: "product-form", onsubmit: handle_submit,
                div { class: "form-group",
                    label { class: "form-label", "Name" }
                    input {
                        class: "form-input",
                        name: "name",
                        r#type: "text",
                        value: "{initial.name}",
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Price" }
                        input {
                            class: "form-input",
                            name: "price",
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            value: "{initial.price}",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Original price (optional)" }
                        input {
                            class: "form-input",
                            name: "original_price",
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            value: initial.original_price.map(|p| p.to_string()).unwrap_or_default(),
                        }
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
                        label { class: "form-label", "Category" }
                        select { class: "form-select", name: "category",
                            option { value: "", "No category" }
                            for name in category_names {
                                option { value: "{name}", selected: initial.category == name, "{name}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Discount % (optional)" }
                        input {
                            class: "form-input",
                            name: "discount_percentage",
                            r#type: "number",
                            min: "0",
                            max: "100",
                            value: initial.discount_percentage.map(|p| p.to_string()).unwrap_or_default(),
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Image (URL or uploaded file)" }
                    input {
                        class: "form-input",
                        name: "image",
                        r#type: "text",
                        placeholder: "https://... or upload below",
                        value: "{image_signal()}",
                        oninput: move |evt| image_signal.set(evt.value()),
                    }
                    input {
                        style: "margin-top: var(--space-2);",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_upload,
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Tags (comma separated)" }
                    input {
                        class: "form-input",
                        name: "tags",
                        r#type: "text",
                        value: initial.tags.join(", "),
                    }
                }
                div { class: "form-group",
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "is_featured",
                            value: "true",
                            checked: initial.is_featured,
                        }
                        label { "Featured" }
                    }
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "is_best_seller",
                            value: "true",
                            checked: initial.is_best_seller,
                        }
                        label { "Best seller" }
                    }
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "is_on_sale",
                            value: "true",
                            checked: initial.is_on_sale,
                        }
                        label { "On sale" }
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between; gap: var(--space-4);",
                    span { class: "status-message", style: "color: var(--error);", "{status_message}" }
                    div { style: "display: flex; gap: var(--space-2);",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| close_modal(),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Save product" }
                    }
                }
            }
        }
    }
}
