//! Stylesheet generators for the published site.
//!
//! Two artifacts: `store.css` (the base layout every page links) and
//! `enhanced.css` (hover/transition polish, linked after the base).  Both are
//! static chunks bundled around a `:root` variable block computed from the
//! resolved theme, so section fragments can lean on the variables instead of
//! repeating hex values.

use constcat::concat;

use crate::theme::ResolvedTheme;

/// The `:root` variable block mirroring the palette; also embedded inline in
/// every generated page so they render sensibly before the stylesheet loads.
pub fn root_variables(theme: &ResolvedTheme) -> String {
    format!(
        r#":root {{
  --primary: {primary};
  --primary-dark: {primary_dark};
  --secondary: {secondary};
  --accent: {accent};
  --background: {background};
  --surface: {surface};
  --text: {text};
  --muted: {muted};
  --font-family: {font_family};
}}"#,
        primary = theme.primary,
        primary_dark = theme.primary_dark,
        secondary = theme.secondary,
        accent = theme.accent,
        background = theme.background,
        surface = theme.surface,
        text = theme.text,
        muted = theme.muted,
        font_family = theme.font_family,
    )
}

const RESET: &str = r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-family);
  color: var(--text);
  background-color: var(--background);
  line-height: 1.6;
}

a {
  color: var(--primary);
  text-decoration: none;
}

img {
  max-width: 100%;
  display: block;
}
"#;

const LAYOUT: &str = r#"
.container {
  max-width: 1140px;
  margin: 0 auto;
  padding: 0 16px;
}

.header-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  min-height: 64px;
}

.brand {
  display: flex;
  align-items: center;
  gap: 12px;
}

.site-logo {
  height: 40px;
  width: auto;
}

.site-name {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text);
}

.site-nav {
  display: flex;
  flex-wrap: wrap;
  gap: 16px;
}

.nav-link {
  color: var(--muted);
  font-weight: 500;
}

.nav-link:hover {
  color: var(--primary);
}

.header-rule {
  height: 2px;
  width: 80px;
  margin: 8px auto;
}

.section-heading {
  font-size: 1.75rem;
  font-weight: 700;
  margin-bottom: 12px;
}

.section-subtitle {
  margin-bottom: 24px;
}

section {
  padding: 48px 0;
}
"#;

const HERO: &str = r#"
.hero-inner {
  text-align: center;
  padding: 48px 0;
}

.hero-title {
  font-size: 2.5rem;
  margin-bottom: 12px;
}

.hero-subtitle {
  font-size: 1.125rem;
  opacity: 0.9;
  margin-bottom: 24px;
}

.hero-columns {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 32px;
  align-items: center;
}

.hero-visual {
  min-height: 260px;
  border-radius: 12px;
  object-fit: cover;
}

.hero-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 24px;
}

.btn {
  display: inline-block;
  padding: 12px 28px;
  border-radius: 8px;
  font-weight: 600;
  border: none;
  cursor: pointer;
}
"#;

const CARDS: &str = r#"
.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 24px;
}

.product-card {
  background: var(--surface);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  display: flex;
  flex-direction: column;
}

.product-image {
  height: 200px;
  width: 100%;
  object-fit: cover;
  background: var(--background);
}

.product-body {
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 8px;
  flex: 1;
}

.product-name {
  font-size: 1.05rem;
  font-weight: 600;
}

.product-description {
  color: var(--muted);
  font-size: 0.9rem;
  flex: 1;
}

.price-row {
  display: flex;
  align-items: baseline;
  gap: 8px;
}

.product-price {
  font-weight: 700;
  color: var(--primary);
}

.original-price {
  color: var(--muted);
  text-decoration: line-through;
  font-size: 0.875rem;
}

.sale-badge {
  position: absolute;
  top: 12px;
  left: 12px;
  background: var(--accent);
  color: #fff;
  font-size: 0.75rem;
  font-weight: 700;
  padding: 4px 10px;
  border-radius: 999px;
}

.card-media {
  position: relative;
}

.order-btn {
  display: block;
  text-align: center;
  padding: 10px;
  border-radius: 8px;
  background: var(--primary);
  color: #fff;
  font-weight: 600;
}

.order-btn.disabled {
  background: var(--muted);
  pointer-events: none;
}

.category-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 16px;
}

.category-card {
  background: var(--surface);
  border-radius: 10px;
  padding: 20px;
  text-align: center;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.category-list .category-card {
  display: flex;
  justify-content: space-between;
  text-align: left;
}

.category-count {
  color: var(--muted);
  font-size: 0.875rem;
}
"#;

const SECTIONS: &str = r#"
.about-columns {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 32px;
  align-items: center;
}

.about-image {
  border-radius: 12px;
}

.stat-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 16px;
  margin-top: 24px;
}

.stat-tile {
  background: var(--surface);
  border-radius: 10px;
  padding: 20px;
  text-align: center;
}

.stat-value {
  font-size: 1.75rem;
  font-weight: 800;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 20px;
}

.feature-card {
  border-radius: 10px;
  padding: 24px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.feature-icon {
  font-size: 1.75rem;
  margin-bottom: 8px;
}

.feature-rows {
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.feature-row {
  display: flex;
  gap: 16px;
  padding: 16px;
}

.faq-container {
  max-width: 760px;
}

.faq-item {
  border-radius: 8px;
  margin-bottom: 8px;
  overflow: hidden;
}

.faq-question {
  width: 100%;
  display: flex;
  justify-content: space-between;
  padding: 16px;
  background: none;
  border: none;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  text-align: left;
}

.faq-answer {
  padding: 0 16px 16px;
}
"#;

const FOOTER: &str = r#"
.site-footer {
  padding: 40px 0 24px;
  margin-top: 48px;
}

.footer-columns {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 24px;
}

.footer-heading {
  margin-bottom: 12px;
}

.footer-link {
  display: block;
  color: inherit;
  opacity: 0.85;
  margin-bottom: 6px;
}

.footer-links-row .footer-link {
  display: inline-block;
  margin: 0 8px;
}

.footer-contact {
  opacity: 0.85;
  margin-bottom: 6px;
}

.footer-note {
  margin-top: 24px;
  font-size: 0.875rem;
  opacity: 0.7;
}

.footer-row {
  display: flex;
  justify-content: space-between;
  padding: 16px 0;
}
"#;

const LISTING: &str = r#"
.listing-toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: 12px;
  margin: 24px 0;
}

.search-input {
  flex: 1;
  min-width: 220px;
  padding: 10px 14px;
  border: 1px solid var(--muted);
  border-radius: 8px;
  font-size: 1rem;
}

.filter-select {
  padding: 10px;
  border: 1px solid var(--muted);
  border-radius: 8px;
  background: var(--surface);
}

.filter-chip {
  padding: 8px 16px;
  border-radius: 999px;
  border: 1px solid var(--muted);
  background: var(--surface);
  cursor: pointer;
}

.filter-chip.active {
  background: var(--primary);
  color: #fff;
  border-color: var(--primary);
}

.empty-results {
  text-align: center;
  color: var(--muted);
  padding: 48px 0;
}
"#;

const RESPONSIVE: &str = r#"
@media (max-width: 720px) {
  .hero-columns,
  .about-columns {
    grid-template-columns: 1fr;
  }

  .header-row {
    flex-direction: column;
    padding: 12px 0;
    gap: 8px;
  }

  .hero-title {
    font-size: 1.75rem;
  }

  .footer-row {
    flex-direction: column;
    gap: 8px;
  }
}
"#;

const STORE_BASE: &str = concat!(RESET, LAYOUT, HERO, CARDS, SECTIONS, FOOTER, LISTING, RESPONSIVE);

/// The base stylesheet, `store.css`.
pub fn generate_store_css(theme: &ResolvedTheme) -> String {
    format!("{}\n{}", root_variables(theme), STORE_BASE)
}

const ENHANCED: &str = r#"
.product-card,
.category-card,
.feature-card {
  transition: transform 180ms ease, box-shadow 180ms ease;
}

.product-card:hover,
.category-card:hover,
.feature-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 10px 24px rgba(0, 0, 0, 0.12);
}

.btn,
.order-btn {
  transition: filter 150ms ease, transform 150ms ease;
}

.btn:hover,
.order-btn:hover {
  filter: brightness(1.08);
  transform: translateY(-1px);
}

.nav-link {
  position: relative;
}

.nav-link::after {
  content: "";
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--primary);
  transition: width 180ms ease;
}

.nav-link:hover::after {
  width: 100%;
}

.faq-question:hover {
  color: var(--primary);
}

html {
  scroll-behavior: smooth;
}
"#;

/// The optional polish layer, `enhanced.css`.
pub fn generate_enhanced_store_css(theme: &ResolvedTheme) -> String {
    // the selection glow is the one rule that needs a literal color: CSS
    // variables cannot be alpha-composited in a box-shadow fallback-free way
    format!(
        "{ENHANCED}\n::selection {{\n  background: {primary};\n  color: #fff;\n}}\n",
        primary = theme.primary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use store::settings::StoreSettings;

    #[test]
    fn variables_mirror_the_resolved_palette() {
        let mut settings = StoreSettings::default();
        settings.colors.primary = Some("#ABCDEF".into());
        let css = generate_store_css(&theme::resolve(&settings));
        assert!(css.contains("--primary: #ABCDEF;"));
        assert!(css.contains("--font-family: 'Segoe UI', Tahoma, sans-serif;"));
        assert!(css.contains(".product-grid"));
    }

    #[test]
    fn enhanced_sheet_uses_theme_selection_color() {
        let settings = StoreSettings::default();
        let css = generate_enhanced_store_css(&theme::resolve(&settings));
        assert!(css.contains("::selection"));
        assert!(css.contains("#2563EB"));
    }
}
