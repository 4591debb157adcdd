//! Hero banner variants.

use store::settings::StoreSettings;

use crate::theme::ResolvedTheme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeroTemplate {
    Classic,
    Split,
    Banner,
}

impl HeroTemplate {
    pub fn from_id(id: &str) -> HeroTemplate {
        match id {
            "split" => HeroTemplate::Split,
            "banner" => HeroTemplate::Banner,
            _ => HeroTemplate::Classic,
        }
    }
}

fn background_style(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    if settings.hero.background_image.is_empty() {
        format!(
            "background:linear-gradient(135deg,{primary},{secondary});",
            primary = theme.primary,
            secondary = theme.secondary
        )
    } else {
        format!(
            "background:url('{img}') center/cover no-repeat;",
            img = settings.hero.background_image
        )
    }
}

pub fn render(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    if !settings.hero.enabled {
        return String::new();
    }

    match HeroTemplate::from_id(&settings.hero_template) {
        HeroTemplate::Classic => classic(settings, theme),
        HeroTemplate::Split => split(settings, theme),
        HeroTemplate::Banner => banner(settings, theme),
    }
}

fn cta(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    if settings.hero.button_text.is_empty() {
        return String::new();
    }
    format!(
        r#"<a class="btn hero-cta" href="{link}" style="background:{accent};color:{surface};">{text}</a>"#,
        link = settings.hero.button_link,
        accent = theme.accent,
        surface = theme.surface,
        text = settings.hero.button_text,
    )
}

fn classic(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    format!(
        r#"<section class="hero" style="{background}color:#fff;">
  <div class="container hero-inner">
    <h1 class="hero-title">{title}</h1>
    <p class="hero-subtitle">{subtitle}</p>
    {cta}
  </div>
</section>"#,
        background = background_style(settings, theme),
        title = settings.hero.title,
        subtitle = settings.hero.subtitle,
        cta = cta(settings, theme),
    )
}

fn split(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    let visual = if settings.hero.background_image.is_empty() {
        format!(
            r#"<div class="hero-visual" style="background:linear-gradient(135deg,{secondary},{accent});"></div>"#,
            secondary = theme.secondary,
            accent = theme.accent
        )
    } else {
        format!(
            r#"<img class="hero-visual" src="{img}" alt="">"#,
            img = settings.hero.background_image
        )
    };
    format!(
        r#"<section class="hero hero-split" style="background:{background};color:{text};">
  <div class="container hero-columns">
    <div class="hero-copy">
      <h1 class="hero-title" style="color:{primary};">{title}</h1>
      <p class="hero-subtitle">{subtitle}</p>
      {cta}
    </div>
    {visual}
  </div>
</section>"#,
        background = theme.background,
        text = theme.text,
        primary = theme.primary,
        title = settings.hero.title,
        subtitle = settings.hero.subtitle,
        cta = cta(settings, theme),
        visual = visual,
    )
}

fn banner(settings: &StoreSettings, theme: &ResolvedTheme) -> String {
    format!(
        r#"<section class="hero hero-banner" style="{background}color:#fff;">
  <div class="container hero-row">
    <div>
      <h1 class="hero-title">{title}</h1>
      <p class="hero-subtitle">{subtitle}</p>
    </div>
    {cta}
  </div>
</section>"#,
        background = background_style(settings, theme),
        title = settings.hero.title,
        subtitle = settings.hero.subtitle,
        cta = cta(settings, theme),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn disabled_hero_renders_nothing() {
        let mut settings = StoreSettings::default();
        settings.hero.enabled = false;
        let resolved = theme::resolve(&settings);
        assert_eq!(render(&settings, &resolved), "");
    }

    #[test]
    fn unknown_template_falls_back_to_classic() {
        assert_eq!(HeroTemplate::from_id("brutalist"), HeroTemplate::Classic);
    }

    #[test]
    fn background_image_wins_over_gradient() {
        let mut settings = StoreSettings::default();
        settings.hero.background_image = "assets/hero-background.jpg".into();
        let resolved = theme::resolve(&settings);
        let html = render(&settings, &resolved);
        assert!(html.contains("assets/hero-background.jpg"));
        assert!(!html.contains("linear-gradient"));
    }
}
