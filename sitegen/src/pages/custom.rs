//! Custom page assembler: the owner's raw HTML inside the site shell.

use store::{CustomPage, StoreData};

use crate::{pages::document_shell, sections, theme};

/// Generate the document for one custom page.
///
/// The page content is embedded verbatim; the store owner authors it and is
/// the trust boundary.
pub fn generate_custom_page_html(page: &CustomPage, data: &StoreData) -> String {
    let settings = &data.settings;
    let resolved = theme::resolve(settings);

    let title = match &page.meta_title {
        Some(meta) if !meta.is_empty() => meta.clone(),
        _ => format!("{} | {}", page.title, settings.name),
    };
    let description = match &page.meta_description {
        Some(meta) if !meta.is_empty() => meta.clone(),
        _ => settings.description.clone(),
    };

    let body = format!(
        r#"{header}
<main class="container" style="padding:32px 16px;">
{content}
</main>
{footer}"#,
        header = sections::header::render(data, &resolved),
        content = page.content,
        footer = sections::footer::render(data, &resolved),
    );

    document_shell(&title, &description, settings, &resolved, &body, "")
}
