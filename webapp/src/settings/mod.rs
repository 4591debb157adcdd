use dioxus::prelude::*;

mod content;
use content::ContentPanel;

mod identity;
use identity::IdentityPanel;

mod listing;
use listing::ListingPanel;

mod sections;
use sections::SectionsPanel;

mod theme;
use theme::ThemePanel;

mod whatsapp;
use whatsapp::WhatsappPanel;

#[derive(Clone, Copy, PartialEq)]
enum SettingsTab {
    Identity,
    Theme,
    Sections,
    Content,
    Whatsapp,
    Listing,
}

#[component]
pub fn Settings() -> Element {
    let mut tab = use_signal(|| SettingsTab::Identity);

    let tab_button = |label: &'static str, target: SettingsTab| {
        let current = tab();
        rsx! {
            button {
                class: if current == target { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                onclick: move |_| tab.set(target),
                "{label}"
            }
        }
    };

    rsx! {
        div { class: "container",
            div { class: "page-header",
                h1 { class: "section-title", "Settings" }
            }

            div { style: "display: flex; gap: var(--space-2); margin-bottom: var(--space-6); flex-wrap: wrap;",
                {tab_button("Store", SettingsTab::Identity)}
                {tab_button("Theme", SettingsTab::Theme)}
                {tab_button("Sections", SettingsTab::Sections)}
                {tab_button("Content", SettingsTab::Content)}
                {tab_button("WhatsApp", SettingsTab::Whatsapp)}
                {tab_button("Search & categories", SettingsTab::Listing)}
            }

            match tab() {
                SettingsTab::Identity => rsx! {
                    IdentityPanel {}
                },
                SettingsTab::Theme => rsx! {
                    ThemePanel {}
                },
                SettingsTab::Sections => rsx! {
                    SectionsPanel {}
                },
                SettingsTab::Content => rsx! {
                    ContentPanel {}
                },
                SettingsTab::Whatsapp => rsx! {
                    WhatsappPanel {}
                },
                SettingsTab::Listing => rsx! {
                    ListingPanel {}
                },
            }
        }
    }
}
