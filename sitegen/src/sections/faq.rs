//! FAQ section variants.

use store::settings::StoreSettings;

use crate::theme::ResolvedTheme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaqTemplate {
    Accordion,
    List,
}

impl FaqTemplate {
    pub fn from_id(id: &str) -> FaqTemplate {
        match id {
            "list" => FaqTemplate::List,
            // "classic" is the accordion; also the unknown-id fallback
            _ => FaqTemplate::Accordion,
        }
    }
}

pub fn render(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    if !settings.faq.enabled || settings.faq.items.is_empty() {
        return String::new();
    }

    match FaqTemplate::from_id(&settings.faq_template) {
        FaqTemplate::Accordion => accordion(settings, theme),
        FaqTemplate::List => list(settings, theme),
    }
}

fn accordion(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let mut items = String::new();
    for (index, item) in settings.faq.items.iter().enumerate() {
        // the faq-toggle handler in the page script drives these panels
        items.push_str(&format!(
            r#"<div class="faq-item" style="background:{surface};">
      <button class="faq-question" data-faq="{index}" style="color:{text};">{question}<span class="faq-marker" style="color:{primary};">+</span></button>
      <div class="faq-answer" id="faq-answer-{index}" hidden style="color:{muted};">{answer}</div>
    </div>"#,
            surface = theme.surface,
            text = theme.text,
            primary = theme.primary,
            muted = theme.muted,
            index = index,
            question = item.question,
            answer = item.answer,
        ));
    }
    format!(
        r#"<section class="faq" id="faq" style="background:{background};">
  <div class="container faq-container">
    <h2 class="section-heading" style="color:{primary};">{title}</h2>
    {items}
  </div>
</section>"#,
        background = theme.background,
        primary = theme.primary,
        title = settings.faq.title,
        items = items,
    )
}

fn list(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let mut items = String::new();
    for item in settings.faq.items.iter() {
        items.push_str(&format!(
            r#"<div class="faq-static"><h3 class="faq-question-static" style="color:{text};">{question}</h3><p class="faq-answer-static" style="color:{muted};">{answer}</p></div>"#,
            text = theme.text,
            muted = theme.muted,
            question = item.question,
            answer = item.answer,
        ));
    }
    format!(
        r#"<section class="faq faq-list" id="faq" style="background:{surface};">
  <div class="container faq-container">
    <h2 class="section-heading" style="color:{primary};">{title}</h2>
    {items}
  </div>
</section>"#,
        surface = theme.surface,
        primary = theme.primary,
        title = settings.faq.title,
        items = items,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use store::settings::FaqItem;

    fn settings_with_items() -> StoreSettings {
        let mut settings = StoreSettings::default();
        settings.faq.items = vec![FaqItem {
            question: "Do you ship?".into(),
            answer: "Yes, worldwide.".into(),
        }];
        settings
    }

    #[test]
    fn disabled_or_empty_faq_renders_nothing() {
        let mut settings = settings_with_items();
        settings.faq.enabled = false;
        let resolved = theme::resolve(&settings);
        assert_eq!(render(&settings, &resolved), "");

        let mut empty = StoreSettings::default();
        empty.faq.items.clear();
        assert_eq!(render(&empty, &theme::resolve(&empty)), "");
    }

    #[test]
    fn accordion_wires_toggle_hooks() {
        let settings = settings_with_items();
        let html = render(&settings, &theme::resolve(&settings));
        assert!(html.contains(r#"data-faq="0""#));
        assert!(html.contains(r#"id="faq-answer-0""#));
    }
}
