//! Site footer variants.

use store::StoreData;

use crate::theme::ResolvedTheme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FooterTemplate {
    Classic,
    Minimal,
    Centered,
}

impl FooterTemplate {
    pub fn from_id(id: &str) -> FooterTemplate {
        match id {
            "minimal" => FooterTemplate::Minimal,
            "centered" => FooterTemplate::Centered,
            _ => FooterTemplate::Classic,
        }
    }
}

fn contact_lines(data: &StoreData) -> String {
    let contact = &data.settings.contact;
    let mut out = String::new();
    if !contact.phone.is_empty() {
        out.push_str(&format!(r#"<p class="footer-contact">{}</p>"#, contact.phone));
    }
    if !contact.email.is_empty() {
        out.push_str(&format!(r#"<p class="footer-contact">{}</p>"#, contact.email));
    }
    if !contact.address.is_empty() {
        out.push_str(&format!(
            r#"<p class="footer-contact">{}</p>"#,
            contact.address
        ));
    }
    out
}

fn link_list(data: &StoreData) -> String {
    let mut out = String::new();
    for link in data.visible_links() {
        out.push_str(&format!(
            r#"<a class="footer-link" href="{href}">{text}</a>"#,
            href = link.href(),
            text = link.text
        ));
    }
    for page in data.published_pages() {
        out.push_str(&format!(
            r#"<a class="footer-link" href="{slug}.html">{title}</a>"#,
            slug = page.slug,
            title = page.title
        ));
    }
    out
}

pub fn render(data: &StoreData, theme: &ResolvedTheme) -> String {
    match FooterTemplate::from_id(&data.settings.footer_template) {
        FooterTemplate::Classic => classic(data, theme),
        FooterTemplate::Minimal => minimal(data, theme),
        FooterTemplate::Centered => centered(data, theme),
    }
}

fn classic(data: &StoreData, theme: &ResolvedTheme) -> String {
    format!(
        r#"<footer class="site-footer" style="background:{text};color:{background};">
  <div class="container footer-columns">
    <div class="footer-col">
      <h3 class="footer-heading" style="color:{secondary};">{name}</h3>
      <p>{description}</p>
    </div>
    <div class="footer-col">
      <h3 class="footer-heading" style="color:{secondary};">Links</h3>
      {links}
    </div>
    <div class="footer-col">
      <h3 class="footer-heading" style="color:{secondary};">Contact</h3>
      {contact}
    </div>
  </div>
  <div class="container footer-note">&copy; {name}</div>
</footer>"#,
        text = theme.text,
        background = theme.background,
        secondary = theme.secondary,
        name = data.settings.name,
        description = data.settings.description,
        links = link_list(data),
        contact = contact_lines(data),
    )
}

fn minimal(data: &StoreData, theme: &ResolvedTheme) -> String {
    format!(
        r#"<footer class="site-footer footer-minimal" style="background:{surface};color:{muted};border-top:1px solid {muted};">
  <div class="container footer-row">
    <span>&copy; {name}</span>
    <span>{links}</span>
  </div>
</footer>"#,
        surface = theme.surface,
        muted = theme.muted,
        name = data.settings.name,
        links = link_list(data),
    )
}

fn centered(data: &StoreData, theme: &ResolvedTheme) -> String {
    format!(
        r#"<footer class="site-footer footer-centered" style="background:{primary_dark};color:#fff;">
  <div class="container" style="text-align:center;">
    <h3 class="footer-heading">{name}</h3>
    <div class="footer-links-row">{links}</div>
    {contact}
    <div class="footer-note">&copy; {name}</div>
  </div>
</footer>"#,
        primary_dark = theme.primary_dark,
        name = data.settings.name,
        links = link_list(data),
        contact = contact_lines(data),
    )
}
