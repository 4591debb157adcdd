use dioxus::prelude::*;

use store::{StoreData, settings::StoreSettings};

use crate::state::{STORE, commit};

fn section_caption(id: &str) -> &'static str {
    match id {
        "hero" => "Hero banner",
        "featured-products" => "Featured products",
        "categories" => "Shop by category",
        "best-sellers" => "Best sellers",
        "on-sale" => "On sale",
        "about" => "About us",
        "features" => "Why choose us",
        "faq" => "FAQ",
        _ => "Unknown section",
    }
}

fn section_enabled(settings: &StoreSettings, id: &str) -> bool {
    match id {
        "hero" => settings.hero.enabled,
        "featured-products" => settings.featured_section.enabled,
        "categories" => settings.category_display.enabled,
        "best-sellers" => settings.best_sellers_section.enabled,
        "on-sale" => settings.on_sale_section.enabled,
        "about" => settings.about.enabled,
        "features" => settings.features.enabled,
        "faq" => settings.faq.enabled,
        _ => false,
    }
}

fn toggle_section(data: &mut StoreData, id: &str) {
    let settings = &mut data.settings;
    match id {
        "hero" => settings.hero.enabled = !settings.hero.enabled,
        "featured-products" => {
            settings.featured_section.enabled = !settings.featured_section.enabled
        }
        "categories" => settings.category_display.enabled = !settings.category_display.enabled,
        "best-sellers" => {
            settings.best_sellers_section.enabled = !settings.best_sellers_section.enabled
        }
        "on-sale" => settings.on_sale_section.enabled = !settings.on_sale_section.enabled,
        "about" => settings.about.enabled = !settings.about.enabled,
        "features" => settings.features.enabled = !settings.features.enabled,
        "faq" => settings.faq.enabled = !settings.faq.enabled,
        _ => {}
    }
}

#[derive(Clone, PartialEq, Props)]
struct TemplatePickerProps {
    label: &'static str,
    field: &'static str,
    current: String,
    options: Vec<(&'static str, &'static str)>,
}

#[component]
fn TemplatePicker(props: TemplatePickerProps) -> Element {
    let field = props.field;
    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{props.label}" }
            select {
                class: "form-select",
                onchange: move |evt| {
                    let value = evt.value();
                    commit(move |data| {
                        let settings = &mut data.settings;
                        match field {
                            "header" => settings.header_template = value.clone(),
                            "hero" => settings.hero_template = value.clone(),
                            "footer" => settings.footer_template = value.clone(),
                            "about" => settings.about_template = value.clone(),
                            "features" => settings.features_template = value.clone(),
                            "faq" => settings.faq_template = value.clone(),
                            _ => {}
                        }
                    });
                },
                for (value , caption) in props.options.clone() {
                    option { value: "{value}", selected: props.current == value, "{caption}" }
                }
            }
        }
    }
}

#[component]
pub fn SectionsPanel() -> Element {
    let settings = STORE.read().settings.clone();
    let section_count = settings.sections.len();

    let rows: Vec<(usize, String, &'static str, bool)> = settings
        .sections
        .iter()
        .enumerate()
        .map(|(index, id)| {
            (
                index,
                id.clone(),
                section_caption(id),
                section_enabled(&settings, id),
            )
        })
        .collect();

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Home page sections" }
            p { style: "color: var(--text-tertiary); margin-bottom: var(--space-3);",
                "Drag-free ordering: use the arrows. Disabled sections are kept in the list but render nothing."
            }
            for (index , id , caption , enabled) in rows {
                div { key: "{id}", class: "section-row",
                    div { style: "display: flex; align-items: center; gap: var(--space-3);",
                        input {
                            r#type: "checkbox",
                            checked: enabled,
                            onchange: {
                                let id = id.clone();
                                move |_| {
                                    let id = id.clone();
                                    commit(move |data| toggle_section(data, &id));
                                }
                            },
                        }
                        span { "{caption}" }
                    }
                    div { style: "display: flex; gap: var(--space-1);",
                        button {
                            class: "btn btn-secondary btn-sm",
                            disabled: index == 0,
                            onclick: move |_| {
                                commit(move |data| {
                                    if index > 0 {
                                        data.settings.sections.swap(index, index - 1);
                                    }
                                });
                            },
                            "↑"
                        }
                        button {
                            class: "btn btn-secondary btn-sm",
                            disabled: index + 1 == section_count,
                            onclick: move |_| {
                                commit(move |data| {
                                    if index + 1 < data.settings.sections.len() {
                                        data.settings.sections.swap(index, index + 1);
                                    }
                                });
                            },
                            "↓"
                        }
                    }
                }
            }
        }

        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Template variants" }
            div { class: "form-row",
                TemplatePicker {
                    label: "Header",
                    field: "header",
                    current: settings.header_template.clone(),
                    options: vec![
                        ("classic", "Classic"),
                        ("centered", "Centered"),
                        ("minimal", "Minimal"),
                    ],
                }
                TemplatePicker {
                    label: "Hero",
                    field: "hero",
                    current: settings.hero_template.clone(),
                    options: vec![("classic", "Classic"), ("split", "Split"), ("banner", "Banner")],
                }
            }
            div { class: "form-row",
                TemplatePicker {
                    label: "Footer",
                    field: "footer",
                    current: settings.footer_template.clone(),
                    options: vec![
                        ("classic", "Classic"),
                        ("minimal", "Minimal"),
                        ("centered", "Centered"),
                    ],
                }
                TemplatePicker {
                    label: "About",
                    field: "about",
                    current: settings.about_template.clone(),
                    options: vec![("classic", "Classic"), ("stats", "With stat tiles")],
                }
            }
            div { class: "form-row",
                TemplatePicker {
                    label: "Why choose us",
                    field: "features",
                    current: settings.features_template.clone(),
                    options: vec![("classic", "Card grid"), ("list", "Vertical list")],
                }
                TemplatePicker {
                    label: "FAQ",
                    field: "faq",
                    current: settings.faq_template.clone(),
                    options: vec![("classic", "Accordion"), ("list", "Static list")],
                }
            }
        }
    }
}
