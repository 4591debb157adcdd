use dioxus::prelude::*;

use sitegen::whatsapp::generate_message;
use store::Product;

use crate::{
    components::modal::{form_flag, form_value},
    state::{STORE, commit},
};

#[component]
pub fn WhatsappPanel() -> Element {
    let settings = STORE.read().settings.clone();
    let mut status_message = use_signal(String::new);

    // preview against the first real product, or a stand-in
    let sample = STORE
        .read()
        .products
        .first()
        .cloned()
        .unwrap_or_else(|| {
            let mut p = Product::new("Sample product".into(), 19.99);
            p.description = "A sample description".into();
            p
        });
    let preview = generate_message(&sample, &settings);

    let handle_submit = move |event: FormEvent| {
        let values = event.values();
        let enabled = form_flag(&values, "enabled");
        let phone_number = form_value(&values, "phone_number").trim().to_string();
        let message_template = form_value(&values, "message_template");
        let include_product_name = form_flag(&values, "include_product_name");
        let include_product_price = form_flag(&values, "include_product_price");
        let include_product_description = form_flag(&values, "include_product_description");
        let include_store_name = form_flag(&values, "include_store_name");
        let include_product_link = form_flag(&values, "include_product_link");

        commit(move |data| {
            let wa = &mut data.settings.whatsapp;
            wa.enabled = enabled;
            wa.phone_number = phone_number.clone();
            wa.message_template = message_template.clone();
            wa.include_product_name = include_product_name;
            wa.include_product_price = include_product_price;
            wa.include_product_description = include_product_description;
            wa.include_store_name = include_store_name;
            wa.include_product_link = include_product_link;
        });
        status_message.set("Saved".into());
    };

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "WhatsApp ordering" }
            form { onsubmit: handle_submit,
                div { class: "form-check",
                    input {
                        r#type: "checkbox",
                        name: "enabled",
                        value: "true",
                        checked: settings.whatsapp.enabled,
                    }
                    label { "Enable order buttons on product cards" }
                }
                div { class: "form-group",
                    label { class: "form-label", "Phone number (international, digits only)" }
                    input {
                        class: "form-input",
                        name: "phone_number",
                        r#type: "text",
                        placeholder: "15551234567",
                        value: "{settings.whatsapp.phone_number}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Message template" }
                    textarea {
                        class: "form-textarea",
                        name: "message_template",
                        value: "{settings.whatsapp.message_template}",
                    }
                    p { style: "color: var(--text-tertiary); font-size: 0.8rem; margin-top: var(--space-1);",
                        "Tokens: {{productName}} {{productPrice}} {{productDescription}} {{storeName}} {{productLink}}. A token stays literal unless its checkbox below is on."
                    }
                }
                div { class: "form-group",
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "include_product_name",
                            value: "true",
                            checked: settings.whatsapp.include_product_name,
                        }
                        label { "Substitute product name" }
                    }
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "include_product_price",
                            value: "true",
                            checked: settings.whatsapp.include_product_price,
                        }
                        label { "Substitute product price" }
                    }
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "include_product_description",
                            value: "true",
                            checked: settings.whatsapp.include_product_description,
                        }
                        label { "Substitute product description" }
                    }
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "include_store_name",
                            value: "true",
                            checked: settings.whatsapp.include_store_name,
                        }
                        label { "Substitute store name" }
                    }
                    div { class: "form-check",
                        input {
                            r#type: "checkbox",
                            name: "include_product_link",
                            value: "true",
                            checked: settings.whatsapp.include_product_link,
                        }
                        label { "Substitute product link" }
                    }
                }
                div {
                    class: "card",
                    style: "background-color: var(--neutral-50); margin-bottom: var(--space-4);",
                    span { style: "color: var(--text-tertiary); font-size: 0.8rem;", "Preview" }
                    p { style: "white-space: pre-wrap;", "{preview}" }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save WhatsApp settings" }
                }
            }
        }
    }
}
