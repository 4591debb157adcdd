use dioxus::prelude::*;

use gloo_console::error as console_error;

use sitegen::{
    css::{generate_enhanced_store_css, generate_store_css},
    generate_custom_page_html, generate_products_page_html, generate_store_html, theme,
};
use store::backup;

use crate::{
    common::download::download_text_file,
    state::{STORE, replace_all},
};

fn offer(filename: &str, mime: &str, contents: &str, status: &mut Signal<String>) {
    match download_text_file(filename, mime, contents) {
        Ok(()) => status.set(format!("Downloaded {filename}")),
        Err(err) => {
            console_error!(format!("download failed: {err}"));
            status.set(format!("Download of {filename} failed, see console"));
        }
    }
}

#[component]
pub fn Export() -> Element {
    let mut status_message = use_signal(String::new);
    let mut import_status = use_signal(String::new);

    // regenerated on every render, so the preview always tracks the aggregate
    let preview_html = generate_store_html(&STORE.read());

    let published: Vec<(String, String)> = {
        let data = STORE.read();
        data.published_pages()
            .map(|p| (p.slug.clone(), p.title.clone()))
            .collect()
    };

    let handle_import = move |evt: FormEvent| async move {
        if let Some(engine) = evt.files() {
            for name in engine.files() {
                match engine.read_file_to_string(&name).await {
                    Some(raw) => match backup::import_json(&raw) {
                        Ok(data) => {
                            // wholesale replacement, saved immediately
                            replace_all(data);
                            import_status.set("Backup imported".into());
                        }
                        Err(err) => {
                            console_error!(format!("import failed: {err}"));
                            import_status.set("Invalid backup file".into());
                        }
                    },
                    None => import_status.set("Could not read the selected file".into()),
                }
            }
        }
    };

    rsx! {
        div { class: "container",
            div { class: "page-header",
                h1 { class: "section-title", "Publish" }
            }

            div { class: "card",
                h2 { style: "margin-bottom: var(--space-3);", "Download site files" }
                p { style: "color: var(--text-tertiary); margin-bottom: var(--space-3);",
                    "Each file is self-contained (uploaded images stay embedded). To split embedded images into an assets/ directory, run the shsm-build tool on a backup file instead."
                }
                div { style: "display: flex; flex-wrap: wrap; gap: var(--space-2);",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let html = generate_store_html(&STORE.read());
                            offer("index.html", "text/html", &html, &mut status_message);
                        },
                        "index.html"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let html = generate_products_page_html(&STORE.read());
                            offer("products.html", "text/html", &html, &mut status_message);
                        },
                        "products.html"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let resolved = theme::resolve(&STORE.read().settings);
                            offer(
                                "store.css",
                                "text/css",
                                &generate_store_css(&resolved),
                                &mut status_message,
                            );
                        },
                        "store.css"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let resolved = theme::resolve(&STORE.read().settings);
                            offer(
                                "enhanced.css",
                                "text/css",
                                &generate_enhanced_store_css(&resolved),
                                &mut status_message,
                            );
                        },
                        "enhanced.css"
                    }
                    for (slug , title) in published {
                        button {
                            class: "btn btn-secondary",
                            onclick: {
                                let slug = slug.clone();
                                move |_| {
                                    let data = STORE.read();
                                    if let Some(page) = data.custom_pages.iter().find(|p| p.slug == slug) {
                                        let html = generate_custom_page_html(page, &data);
                                        let filename = format!("{}.html", page.slug);
                                        drop(data);
                                        offer(&filename, "text/html", &html, &mut status_message);
                                    }
                                }
                            },
                            "{title}"
                        }
                    }
                }
                span {
                    class: "status-message",
                    style: "color: var(--success); display: block; margin-top: var(--space-2);",
                    "{status_message}"
                }
            }

            div { class: "card",
                h2 { style: "margin-bottom: var(--space-3);", "Backup" }
                div { style: "display: flex; align-items: center; gap: var(--space-4); flex-wrap: wrap;",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let data = STORE.read();
                            let filename = backup::filename(&data.settings);
                            let json = backup::export_json(&data);
                            drop(data);
                            offer(&filename, "application/json", &json, &mut status_message);
                        },
                        "Export backup JSON"
                    }
                    div {
                        label { class: "form-label", "Import backup (replaces everything)" }
                        input { r#type: "file", accept: ".json", onchange: handle_import }
                    }
                    span { class: "status-message", "{import_status}" }
                }
            }

            div { class: "card",
                h2 { style: "margin-bottom: var(--space-3);", "Live preview" }
                iframe { class: "preview-frame", srcdoc: "{preview_html}" }
            }
        }
    }
}
