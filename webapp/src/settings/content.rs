use dioxus::prelude::*;

use store::settings::{FaqItem, FeatureItem, StatItem};

use crate::{
    components::modal::form_value,
    state::{STORE, commit},
};

#[component]
pub fn ContentPanel() -> Element {
    rsx! {
        HeroEditor {}
        AboutEditor {}
        FeaturesEditor {}
        FaqEditor {}
    }
}

#[component]
fn HeroEditor() -> Element {
    let hero = STORE.read().settings.hero.clone();
    let mut status_message = use_signal(String::new);

    let handle_submit = move |event: FormEvent| {
        let values = event.values();
        let title = form_value(&values, "title");
        let subtitle = form_value(&values, "subtitle");
        let button_text = form_value(&values, "button_text");
        let button_link = form_value(&values, "button_link");
        let background_image = form_value(&values, "background_image");

        commit(move |data| {
            let hero = &mut data.settings.hero;
            hero.title = title.clone();
            hero.subtitle = subtitle.clone();
            hero.button_text = button_text.clone();
            hero.button_link = button_link.clone();
            hero.background_image = background_image.clone();
        });
        status_message.set("Saved".into());
    };

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Hero" }
            form { onsubmit: handle_submit,
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Title" }
                        input {
                            class: "form-input",
                            name: "title",
                            r#type: "text",
                            value: "{hero.title}",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Subtitle" }
                        input {
                            class: "form-input",
                            name: "subtitle",
                            r#type: "text",
                            value: "{hero.subtitle}",
                        }
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Button text" }
                        input {
                            class: "form-input",
                            name: "button_text",
                            r#type: "text",
                            value: "{hero.button_text}",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Button link" }
                        input {
                            class: "form-input",
                            name: "button_link",
                            r#type: "text",
                            value: "{hero.button_link}",
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Background image URL (empty = themed gradient)" }
                    input {
                        class: "form-input",
                        name: "background_image",
                        r#type: "text",
                        value: "{hero.background_image}",
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save hero" }
                }
            }
        }
    }
}

#[component]
fn AboutEditor() -> Element {
    let about = STORE.read().settings.about.clone();
    let mut status_message = use_signal(String::new);
    let mut stats = use_signal(|| about.stats.clone());

    let handle_submit = move |event: FormEvent| {
        let values = event.values();
        let title = form_value(&values, "title");
        let text = form_value(&values, "text");
        let image = form_value(&values, "image");
        let stats_now: Vec<StatItem> = stats()
            .into_iter()
            .filter(|s| !s.label.trim().is_empty() || !s.value.trim().is_empty())
            .collect();

        commit(move |data| {
            let about = &mut data.settings.about;
            about.title = title.clone();
            about.text = text.clone();
            about.image = image.clone();
            about.stats = stats_now.clone();
        });
        status_message.set("Saved".into());
    };

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "About" }
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { class: "form-label", "Title" }
                    input {
                        class: "form-input",
                        name: "title",
                        r#type: "text",
                        value: "{about.title}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Text" }
                    textarea {
                        class: "form-textarea",
                        name: "text",
                        value: "{about.text}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Image URL" }
                    input {
                        class: "form-input",
                        name: "image",
                        r#type: "text",
                        value: "{about.image}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Stat tiles (shown by the stats template)" }
                    for (index , stat) in stats().into_iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "display: flex; gap: var(--space-2); margin-bottom: var(--space-2);",
                            input {
                                class: "form-input",
                                placeholder: "500+",
                                value: "{stat.value}",
                                oninput: move |evt| stats.with_mut(|v| v[index].value = evt.value()),
                            }
                            input {
                                class: "form-input",
                                placeholder: "Happy customers",
                                value: "{stat.label}",
                                oninput: move |evt| stats.with_mut(|v| v[index].label = evt.value()),
                            }
                            button {
                                class: "btn btn-danger btn-sm",
                                r#type: "button",
                                onclick: move |_| {
                                    stats.with_mut(|v| {
                                        v.remove(index);
                                    });
                                },
                                "Remove"
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary btn-sm",
                        r#type: "button",
                        onclick: move |_| stats.with_mut(|v| v.push(StatItem::default())),
                        "Add stat"
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save about" }
                }
            }
        }
    }
}

#[component]
fn FeaturesEditor() -> Element {
    let features = STORE.read().settings.features.clone();
    let mut status_message = use_signal(String::new);
    let mut items = use_signal(|| features.items.clone());

    let handle_submit = move |event: FormEvent| {
        let values = event.values();
        let title = form_value(&values, "title");
        let subtitle = form_value(&values, "subtitle");
        let items_now: Vec<FeatureItem> = items()
            .into_iter()
            .filter(|i| !i.title.trim().is_empty())
            .collect();

        commit(move |data| {
            let features = &mut data.settings.features;
            features.title = title.clone();
            features.subtitle = subtitle.clone();
            features.items = items_now.clone();
        });
        status_message.set("Saved".into());
    };

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "Why choose us" }
            form { onsubmit: handle_submit,
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "Title" }
                        input {
                            class: "form-input",
                            name: "title",
                            r#type: "text",
                            value: "{features.title}",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Subtitle" }
                        input {
                            class: "form-input",
                            name: "subtitle",
                            r#type: "text",
                            value: "{features.subtitle}",
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Items" }
                    for (index , item) in items().into_iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "display: flex; gap: var(--space-2); margin-bottom: var(--space-2);",
                            input {
                                class: "form-input",
                                style: "max-width: 70px;",
                                placeholder: "🚚",
                                value: "{item.icon}",
                                oninput: move |evt| items.with_mut(|v| v[index].icon = evt.value()),
                            }
                            input {
                                class: "form-input",
                                placeholder: "Fast delivery",
                                value: "{item.title}",
                                oninput: move |evt| items.with_mut(|v| v[index].title = evt.value()),
                            }
                            input {
                                class: "form-input",
                                placeholder: "Orders leave the same day",
                                value: "{item.text}",
                                oninput: move |evt| items.with_mut(|v| v[index].text = evt.value()),
                            }
                            button {
                                class: "btn btn-danger btn-sm",
                                r#type: "button",
                                onclick: move |_| {
                                    items.with_mut(|v| {
                                        v.remove(index);
                                    });
                                },
                                "Remove"
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary btn-sm",
                        r#type: "button",
                        onclick: move |_| items.with_mut(|v| v.push(FeatureItem::default())),
                        "Add item"
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save features" }
                }
            }
        }
    }
}

#[component]
fn FaqEditor() -> Element {
    let faq = STORE.read().settings.faq.clone();
    let mut status_message = use_signal(String::new);
    let mut items = use_signal(|| faq.items.clone());

    let handle_submit = move |event: FormEvent| {
        let values = event.values();
        let title = form_value(&values, "title");
        let items_now: Vec<FaqItem> = items()
            .into_iter()
            .filter(|i| !i.question.trim().is_empty())
            .collect();

        commit(move |data| {
            let faq = &mut data.settings.faq;
            faq.title = title.clone();
            faq.items = items_now.clone();
        });
        status_message.set("Saved".into());
    };

    rsx! {
        div { class: "card",
            h2 { style: "margin-bottom: var(--space-3);", "FAQ" }
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { class: "form-label", "Title" }
                    input {
                        class: "form-input",
                        name: "title",
                        r#type: "text",
                        value: "{faq.title}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Questions" }
                    for (index , item) in items().into_iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "display: flex; gap: var(--space-2); margin-bottom: var(--space-2);",
                            input {
                                class: "form-input",
                                placeholder: "Do you ship internationally?",
                                value: "{item.question}",
                                oninput: move |evt| items.with_mut(|v| v[index].question = evt.value()),
                            }
                            input {
                                class: "form-input",
                                placeholder: "Yes, worldwide.",
                                value: "{item.answer}",
                                oninput: move |evt| items.with_mut(|v| v[index].answer = evt.value()),
                            }
                            button {
                                class: "btn btn-danger btn-sm",
                                r#type: "button",
                                onclick: move |_| {
                                    items.with_mut(|v| {
                                        v.remove(index);
                                    });
                                },
                                "Remove"
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary btn-sm",
                        r#type: "button",
                        onclick: move |_| items.with_mut(|v| v.push(FaqItem::default())),
                        "Add question"
                    }
                }
                div { style: "display: flex; align-items: center; justify-content: space-between;",
                    span { class: "status-message", style: "color: var(--success);", "{status_message}" }
                    button { class: "btn btn-primary", r#type: "submit", "Save FAQ" }
                }
            }
        }
    }
}
