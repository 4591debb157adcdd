use dioxus::prelude::*;

use crate::{
    components::modal::{form_flag, form_value},
    state::{STORE, commit},
};

fn weight_from_form(raw: String) -> u32 {
    raw.trim().parse().unwrap_or(1).max(1)
}

#[component]
pub fn ListingPanel() -> Element {
    let settings = STORE.read().settings.clone();
    let mut status_message = use_signal(String::new);

    let handle_search = move |event: FormEvent| {
        let values = event.values();
        let enabled = form_flag(&values, "enabled");
        let fields = [
            ("name", form_flag(&values, "name_enabled"), weight_from_form(form_value(&values, "name_weight"))),
            ("description", form_flag(&values, "description_enabled"), weight_from_form(form_value(&values, "description_weight"))),
            ("category", form_flag(&values, "category_enabled"), weight_from_form(form_value(&values, "category_weight"))),
            ("tags", form_flag(&values, "tags_enabled"), weight_from_form(form_value(&values, "tags_weight"))),
        ];

        commit(move |data| {
            let search = &mut data.settings.search;
            search.enabled = enabled;
            for (key, field_enabled, weight) in fields.iter() {
                let slot = match *key {
                    "name" => &mut search.name,
                    "description" => &mut search.description,
                    "category" => &mut search.category,
                    _ => &mut search.tags,
                };
                slot.enabled = *field_enabled;
                slot.weight = *weight;
            }
        });
        status_message.set("Saved".into());
    };

    let mut display_status = use_signal(String::new);
    let handle_display = move |event: FormEvent| {
        let values = event.values();
        let enabled = form_flag(&values, "enabled");
        let title = form_value(&values, "title");
        let style = form_value(&values, "style");
        let show_product_counts = form_flag(&values, "show_product_counts");

        commit(move |data| {
            let display = &mut data.settings.category_display;
            display.enabled = enabled;
            display.title = title.clone();
            display.style = style.clone();
            display.show_product_counts = show_product_counts;
        });
        display_status.set("Saved".into());
    };

    let weight_row = |label: &'static str,
                      enabled_name: &'static str,
                      weight_name: &'static str,
                      enabled: bool,
                      weight: u32| {
        rsx! {
            div { style: "display: flex; align-items: center; gap: var(--space-3); margin-bottom: var(--space-2);",
                input {
                    r#type: "checkbox",
                    name: enabled_name,
                    value: "true",
                    checked: enabled,
                }
                span { style: "flex: 1;", "{label}" }
                input {
                    class: "form-input",
                    style: "max-width: 90px;",
                    name: weight_name,
                    r#type: "number",
                    min: "1",
                    value: "{weight}",
                }
            }
        }
    };

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Product search" }
            p { style: "color: var(--text-tertiary); margin-bottom: var(--space-3);",
                "Matched fields add their weight to a product's rank on the listing page."
            }
            form { onsubmit: handle_search,
                div { class: "form-check",
                    input {
                        r#type: "checkbox",
                        name: "enabled",
                        value: "true",
                        checked: settings.search.enabled,
                    }
                    label { "Show the search box on the products page" }
                }
                {weight_row("Name", "name_enabled", "name_weight", settings.search.name.enabled, settings.search.name.weight)}
                {weight_row(
                    "Description",
                    "description_enabled",
                    "description_weight",
                    settings.search.description.enabled,
                    settings.search.description.weight,
                )}
                {weight_row(
                    "Category",
                    "category_enabled",
                    "category_weight",
                    settings.search.category.enabled,
                    settings.search.category.weight,
                )}
                {weight_row("Tags", "tags_enabled", "tags_weight", settings.search.tags.enabled, settings.search.tags.weight)}
                div { style: "display: flex; align-items: center; justify-content: space-between; margin-top: var(--space-3);",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save search settings" }
                }
            }
        }

        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Category display" }
            form { onsubmit: handle_display,
                div { class: "form-check",
                    input {
                        r#type: "checkbox",
                        name: "enabled",
                        value: "true",
                        checked: settings.category_display.enabled,
                    }
                    label { "Show the category section on the home page" }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Section title" }
                        input {
                            class: "form-input",
                            name: "title",
                            r#type: "text",
                            value: "{settings.category_display.title}",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Layout" }
                        select { class: "form-select", name: "style",
                            option {
                                value: "grid",
                                selected: settings.category_display.style == "grid",
                                "Grid"
                            }
                            option {
                                value: "list",
                                selected: settings.category_display.style == "list",
                                "List"
                            }
                        }
                    }
                }
                div { class: "form-check",
                    input {
                        r#type: "checkbox",
                        name: "show_product_counts",
                        value: "true",
                        checked: settings.category_display.show_product_counts,
                    }
                    label { "Show product counts" }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between; margin-top: var(--space-3);",
                    span { class: "status-message", style: "color: var(--success);", "{display_status}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save category display" }
                }
            }
        }
    }
}
