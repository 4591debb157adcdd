use base64::{Engine as _, engine::general_purpose::STANDARD};
use dioxus::prelude::*;

use crate::{
    components::modal::form_value,
    state::{STORE, commit},
};

#[component]
pub fn IdentityPanel() -> Element {
    let settings = STORE.read().settings.clone();

    let mut status_message = use_signal(String::new);
    let mut logo_signal = use_signal(|| settings.logo.clone());
    let mut favicon_signal = use_signal(|| settings.favicon.clone());

    let handle_submit = move |event: FormEvent| {
        let values = event.values();

        let name = form_value(&values, "name").trim().to_string();
        if name.is_empty() {
            status_message.set("Store name is required".into());
            return;
        }

        let description = form_value(&values, "description");
        let phone = form_value(&values, "phone");
        let email = form_value(&values, "email");
        let address = form_value(&values, "address");
        let font_family = form_value(&values, "font_family");
        let logo = logo_signal();
        let favicon = favicon_signal();

        commit(move |data| {
            let settings = &mut data.settings;
            settings.name = name.clone();
            settings.description = description.clone();
            settings.logo = logo.clone();
            settings.favicon = favicon.clone();
            settings.contact.phone = phone.clone();
            settings.contact.email = email.clone();
            settings.contact.address = address.clone();
            if !font_family.is_empty() {
                settings.font_family = font_family.clone();
            }
        });
        status_message.set("Saved".into());
    };

    let handle_logo_upload = move |evt: FormEvent| async move {
        if let Some(engine) = evt.files() {
            for name in engine.files() {
                if let Some(bytes) = engine.read_file(&name).await {
                    let mime = mime_guess::from_path(&name).first_or_octet_stream();
                    logo_signal.set(format!("data:{mime};base64,{}", STANDARD.encode(&bytes)));
                }
            }
        }
    };

    rsx! {
        div { class: "card",
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { class: "form-label", "Store name" }
                    input {
                        class: "form-input",
                        name: "name",
                        r#type: "text",
                        value: "{settings.name}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Description" }
                    textarea {
                        class: "form-textarea",
                        name: "description",
                        value: "{settings.description}",
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Logo (URL or upload)" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{logo_signal()}",
                            oninput: move |evt| logo_signal.set(evt.value()),
                        }
                        input {
                            style: "margin-top: var(--space-2);",
                            r#type: "file",
                            accept: "image/*",
                            onchange: handle_logo_upload,
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Favicon URL" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{favicon_signal()}",
                            oninput: move |evt| favicon_signal.set(evt.value()),
                        }
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Contact phone" }
                        input {
                            class: "form-input",
                            name: "phone",
                            r#type: "text",
                            value: "{settings.contact.phone}",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Contact email" }
                        input {
                            class: "form-input",
                            name: "email",
                            r#type: "text",
                            value: "{settings.contact.email}",
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Address" }
                    input {
                        class: "form-input",
                        name: "address",
                        r#type: "text",
                        value: "{settings.contact.address}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Storefront font" }
                    select { class: "form-select", name: "font_family",
                        option {
                            value: "'Segoe UI', Tahoma, sans-serif",
                            selected: settings.font_family.contains("Segoe"),
                            "Segoe UI"
                        }
                        option {
                            value: "Georgia, 'Times New Roman', serif",
                            selected: settings.font_family.contains("Georgia"),
                            "Georgia (serif)"
                        }
                        option {
                            value: "'Courier New', monospace",
                            selected: settings.font_family.contains("Courier"),
                            "Courier (monospace)"
                        }
                        option {
                            value: "system-ui, sans-serif",
                            selected: settings.font_family.contains("system-ui"),
                            "System default"
                        }
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save store details" }
                }
            }
        }
    }
}
