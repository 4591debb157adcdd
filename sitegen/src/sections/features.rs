//! "Why choose us" section variants.

use store::settings::StoreSettings;

use crate::theme::ResolvedTheme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeaturesTemplate {
    Grid,
    List,
}

impl FeaturesTemplate {
    pub fn from_id(id: &str) -> FeaturesTemplate {
        match id {
            "list" => FeaturesTemplate::List,
            // "classic" and anything unknown render the grid
            _ => FeaturesTemplate::Grid,
        }
    }
}

pub fn render(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    if !settings.features.enabled {
        return String::new();
    }

    match FeaturesTemplate::from_id(&settings.features_template) {
        FeaturesTemplate::Grid => grid(settings, theme),
        FeaturesTemplate::List => list(settings, theme),
    }
}

fn heading(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let subtitle = if settings.features.subtitle.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="section-subtitle" style="color:{muted};">{subtitle}</p>"#,
            muted = theme.muted,
            subtitle = settings.features.subtitle
        )
    };
    format!(
        r#"<h2 class="section-heading" style="color:{primary};">{title}</h2>{subtitle}"#,
        primary = theme.primary,
        title = settings.features.title,
        subtitle = subtitle,
    )
}

fn grid(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let mut cards = String::new();
    for item in settings.features.items.iter() {
        cards.push_str(&format!(
            r#"<div class="feature-card" style="background:{surface};"><div class="feature-icon">{icon}</div><h3 class="feature-title" style="color:{text};">{title}</h3><p class="feature-text" style="color:{muted};">{body}</p></div>"#,
            surface = theme.surface,
            text = theme.text,
            muted = theme.muted,
            icon = item.icon,
            title = item.title,
            body = item.text,
        ));
    }
    format!(
        r#"<section class="features" id="features" style="background:{background};">
  <div class="container">
    {heading}
    <div class="feature-grid">{cards}</div>
  </div>
</section>"#,
        background = theme.background,
        heading = heading(settings, theme),
        cards = cards,
    )
}

fn list(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let mut rows = String::new();
    for item in settings.features.items.iter() {
        rows.push_str(&format!(
            r#"<div class="feature-row" style="border-left:4px solid {accent};"><span class="feature-icon">{icon}</span><div><h3 class="feature-title" style="color:{text};">{title}</h3><p class="feature-text" style="color:{muted};">{body}</p></div></div>"#,
            accent = theme.accent,
            text = theme.text,
            muted = theme.muted,
            icon = item.icon,
            title = item.title,
            body = item.text,
        ));
    }
    format!(
        r#"<section class="features features-list" id="features" style="background:{surface};">
  <div class="container">
    {heading}
    <div class="feature-rows">{rows}</div>
  </div>
</section>"#,
        surface = theme.surface,
        heading = heading(settings, theme),
        rows = rows,
    )
}
