//! Site header variants.

use store::StoreData;

use crate::theme::ResolvedTheme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderTemplate {
    Classic,
    Centered,
    Minimal,
}

impl HeaderTemplate {
    pub fn from_id(id: &str) -> HeaderTemplate {
        match id {
            "centered" => HeaderTemplate::Centered,
            "minimal" => HeaderTemplate::Minimal,
            // classic doubles as the fallback for unrecognized ids
            _ => HeaderTemplate::Classic,
        }
    }
}

fn logo_html(data: &StoreData) -> String {
    if data.settings.logo.is_empty() {
        format!(
            r#"<span class="site-name">{name}</span>"#,
            name = data.settings.name
        )
    } else {
        format!(
            r#"<img class="site-logo" src="{logo}" alt="{name}"><span class="site-name">{name}</span>"#,
            logo = data.settings.logo,
            name = data.settings.name
        )
    }
}

fn nav_html(data: &StoreData) -> String {
    let mut items = String::new();
    for link in data.visible_links() {
        items.push_str(&format!(
            r#"<a class="nav-link" href="{href}">{text}</a>"#,
            href = link.href(),
            text = link.text
        ));
    }
    // the products page link is always present, after the configured links
    items.push_str(r#"<a class="nav-link" href="products.html">Products</a>"#);
    format!(r#"<nav class="site-nav">{items}</nav>"#)
}

/// Render the header fragment for the configured template variant.
pub fn render(data: &StoreData, theme: &ResolvedTheme) -> String {
    match HeaderTemplate::from_id(&data.settings.header_template) {
        HeaderTemplate::Classic => classic(data, theme),
        HeaderTemplate::Centered => centered(data, theme),
        HeaderTemplate::Minimal => minimal(data, theme),
    }
}

fn classic(data: &StoreData, theme: &ResolvedTheme) -> String {
    format!(
        r#"<header class="site-header" style="background:{surface};border-bottom:3px solid {primary};">
  <div class="container header-row">
    <a class="brand" href="index.html">{logo}</a>
    {nav}
  </div>
</header>"#,
        surface = theme.surface,
        primary = theme.primary,
        logo = logo_html(data),
        nav = nav_html(data),
    )
}

fn centered(data: &StoreData, theme: &ResolvedTheme) -> String {
    format!(
        r#"<header class="site-header header-centered" style="background:{surface};">
  <div class="container" style="text-align:center;">
    <a class="brand" href="index.html">{logo}</a>
    <div class="header-rule" style="background:{primary};"></div>
    {nav}
  </div>
</header>"#,
        surface = theme.surface,
        primary = theme.primary,
        logo = logo_html(data),
        nav = nav_html(data),
    )
}

fn minimal(data: &StoreData, theme: &ResolvedTheme) -> String {
    format!(
        r#"<header class="site-header header-minimal" style="background:transparent;color:{text};">
  <div class="container header-row">
    <a class="brand" href="index.html"><span class="site-name">{name}</span></a>
    {nav}
  </div>
</header>"#,
        text = theme.text,
        name = data.settings.name,
        nav = nav_html(data),
    )
}
