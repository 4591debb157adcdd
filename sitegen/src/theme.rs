//! Fixed theme catalog and resolution against per-store overrides.

use store::settings::StoreSettings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredefinedTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub palette: Palette,
}

pub static THEMES: [PredefinedTheme; 6] = [
    PredefinedTheme {
        id: "ocean",
        name: "Ocean",
        palette: Palette {
            primary: "#2563EB",
            primary_dark: "#1D4ED8",
            secondary: "#0EA5E9",
            accent: "#F59E0B",
            background: "#F8FAFC",
            surface: "#FFFFFF",
            text: "#0F172A",
            muted: "#64748B",
        },
    },
    PredefinedTheme {
        id: "forest",
        name: "Forest",
        palette: Palette {
            primary: "#16A34A",
            primary_dark: "#15803D",
            secondary: "#84CC16",
            accent: "#EAB308",
            background: "#F7FEF4",
            surface: "#FFFFFF",
            text: "#14532D",
            muted: "#6B7280",
        },
    },
    PredefinedTheme {
        id: "sunset",
        name: "Sunset",
        palette: Palette {
            primary: "#EA580C",
            primary_dark: "#C2410C",
            secondary: "#F97316",
            accent: "#DB2777",
            background: "#FFF7ED",
            surface: "#FFFFFF",
            text: "#431407",
            muted: "#78716C",
        },
    },
    PredefinedTheme {
        id: "royal",
        name: "Royal",
        palette: Palette {
            primary: "#7C3AED",
            primary_dark: "#6D28D9",
            secondary: "#A855F7",
            accent: "#F43F5E",
            background: "#FAF5FF",
            surface: "#FFFFFF",
            text: "#2E1065",
            muted: "#6B7280",
        },
    },
    PredefinedTheme {
        id: "mono",
        name: "Monochrome",
        palette: Palette {
            primary: "#111827",
            primary_dark: "#030712",
            secondary: "#4B5563",
            accent: "#9CA3AF",
            background: "#F9FAFB",
            surface: "#FFFFFF",
            text: "#111827",
            muted: "#6B7280",
        },
    },
    PredefinedTheme {
        id: "desert",
        name: "Desert",
        palette: Palette {
            primary: "#B45309",
            primary_dark: "#92400E",
            secondary: "#D97706",
            accent: "#059669",
            background: "#FFFBEB",
            surface: "#FFFFFF",
            text: "#451A03",
            muted: "#78716C",
        },
    },
];

/// Look up a theme by id, silently falling back to the catalog's first entry.
///
/// The fallback is part of the contract: an unknown id (a removed theme in an
/// old backup) must still produce a publishable site.
pub fn theme_by_id(id: &str) -> &'static PredefinedTheme {
    THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
}

/// A theme with per-store color overrides and the font applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub primary: String,
    pub primary_dark: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
    pub font_family: String,
}

pub fn resolve(settings: &StoreSettings) -> ResolvedTheme {
    let base = theme_by_id(&settings.theme_id).palette;
    let overrides = &settings.colors;

    let pick = |override_color: &Option<String>, default: &'static str| -> String {
        match override_color {
            Some(color) if !color.is_empty() => color.clone(),
            _ => default.to_string(),
        }
    };

    ResolvedTheme {
        primary: pick(&overrides.primary, base.primary),
        primary_dark: base.primary_dark.to_string(),
        secondary: pick(&overrides.secondary, base.secondary),
        accent: pick(&overrides.accent, base.accent),
        background: pick(&overrides.background, base.background),
        surface: base.surface.to_string(),
        text: pick(&overrides.text, base.text),
        muted: base.muted.to_string(),
        font_family: settings.font_family.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_id_resolves_to_itself() {
        for theme in THEMES.iter() {
            assert_eq!(theme_by_id(theme.id).id, theme.id);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_first_entry() {
        assert_eq!(theme_by_id("midnight").id, THEMES[0].id);
        assert_eq!(theme_by_id("").id, THEMES[0].id);
    }

    #[test]
    fn overrides_replace_only_set_colors() {
        let mut settings = StoreSettings::default();
        settings.theme_id = "forest".into();
        settings.colors.primary = Some("#123456".into());
        settings.colors.background = Some(String::new()); // empty string = unset

        let resolved = resolve(&settings);
        assert_eq!(resolved.primary, "#123456");
        assert_eq!(resolved.background, "#F7FEF4");
        assert_eq!(resolved.secondary, "#84CC16");
    }
}
