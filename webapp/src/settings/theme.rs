use dioxus::prelude::*;

use sitegen::theme::THEMES;

use crate::{
    components::modal::form_value,
    state::{STORE, commit},
};

fn override_from_form(raw: String) -> Option<String> {
    let trimmed = raw.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[component]
pub fn ThemePanel() -> Element {
    let settings = STORE.read().settings.clone();
    let mut status_message = use_signal(String::new);

    let handle_overrides = move |event: FormEvent| {
        let values = event.values();
        let primary = override_from_form(form_value(&values, "primary"));
        let secondary = override_from_form(form_value(&values, "secondary"));
        let accent = override_from_form(form_value(&values, "accent"));
        let background = override_from_form(form_value(&values, "background"));
        let text = override_from_form(form_value(&values, "text"));

        commit(move |data| {
            let colors = &mut data.settings.colors;
            colors.primary = primary.clone();
            colors.secondary = secondary.clone();
            colors.accent = accent.clone();
            colors.background = background.clone();
            colors.text = text.clone();
        });
        status_message.set("Overrides saved".into());
    };

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Palette" }
            div { class: "theme-card-row",
                for theme in THEMES.iter() {
                    div {
                        key: "{theme.id}",
                        class: if settings.theme_id == theme.id { "theme-card selected" } else { "theme-card" },
                        onclick: move |_| {
                            commit(|data| data.settings.theme_id = theme.id.to_string());
                        },
                        div { class: "theme-swatch-row",
                            div {
                                class: "theme-swatch",
                                style: "background: {theme.palette.primary};",
                            }
                            div {
                                class: "theme-swatch",
                                style: "background: {theme.palette.secondary};",
                            }
                            div {
                                class: "theme-swatch",
                                style: "background: {theme.palette.accent};",
                            }
                        }
                        span { "{theme.name}" }
                    }
                }
            }
        }

        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Color overrides" }
            p { style: "color: var(--text-tertiary); margin-bottom: var(--space-3);",
                "Leave a field empty to use the palette color."
            }
            form { onsubmit: handle_overrides,
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Primary" }
                        input {
                            class: "form-input",
                            name: "primary",
                            r#type: "text",
                            placeholder: "#2563EB",
                            value: settings.colors.primary.clone().unwrap_or_default(),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Secondary" }
                        input {
                            class: "form-input",
                            name: "secondary",
                            r#type: "text",
                            value: settings.colors.secondary.clone().unwrap_or_default(),
                        }
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Accent" }
                        input {
                            class: "form-input",
                            name: "accent",
                            r#type: "text",
                            value: settings.colors.accent.clone().unwrap_or_default(),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Background" }
                        input {
                            class: "form-input",
                            name: "background",
                            r#type: "text",
                            value: settings.colors.background.clone().unwrap_or_default(),
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Text" }
                    input {
                        class: "form-input",
                        name: "text",
                        r#type: "text",
                        value: settings.colors.text.clone().unwrap_or_default(),
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save overrides" }
                }
            }
        }
    }
}
