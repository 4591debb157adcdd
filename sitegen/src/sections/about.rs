//! About section variants.

use store::settings::StoreSettings;

use crate::theme::ResolvedTheme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AboutTemplate {
    Classic,
    Stats,
}

impl AboutTemplate {
    pub fn from_id(id: &str) -> AboutTemplate {
        match id {
            "stats" => AboutTemplate::Stats,
            _ => AboutTemplate::Classic,
        }
    }
}

pub fn render(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    if !settings.about.enabled {
        return String::new();
    }

    match AboutTemplate::from_id(&settings.about_template) {
        AboutTemplate::Classic => classic(settings, theme),
        AboutTemplate::Stats => stats(settings, theme),
    }
}

fn classic(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let image = if settings.about.image.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img class="about-image" src="{img}" alt="{title}">"#,
            img = settings.about.image,
            title = settings.about.title
        )
    };
    format!(
        r#"<section class="about" id="about" style="background:{surface};">
  <div class="container about-columns">
    <div class="about-copy">
      <h2 class="section-heading" style="color:{primary};">{title}</h2>
      <p class="about-text" style="color:{muted};">{text}</p>
    </div>
    {image}
  </div>
</section>"#,
        surface = theme.surface,
        primary = theme.primary,
        muted = theme.muted,
        title = settings.about.title,
        text = settings.about.text,
        image = image,
    )
}

fn stats(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let mut tiles = String::new();
    for stat in settings.about.stats.iter() {
        tiles.push_str(&format!(
            r#"<div class="stat-tile" style="border-top:4px solid {accent};"><div class="stat-value" style="color:{primary};">{value}</div><div class="stat-label" style="color:{muted};">{label}</div></div>"#,
            accent = theme.accent,
            primary = theme.primary,
            muted = theme.muted,
            value = stat.value,
            label = stat.label,
        ));
    }
    format!(
        r#"<section class="about about-stats" id="about" style="background:{background};">
  <div class="container">
    <h2 class="section-heading" style="color:{primary};">{title}</h2>
    <p class="about-text" style="color:{muted};">{text}</p>
    <div class="stat-grid">{tiles}</div>
  </div>
</section>"#,
        background = theme.background,
        primary = theme.primary,
        muted = theme.muted,
        title = settings.about.title,
        text = settings.about.text,
        tiles = tiles,
    )
}
