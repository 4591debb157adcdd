//! URL slug derivation shared by categories and custom pages.

use std::sync::LazyLock;

use regex::Regex;

// anything outside Arabic letters, Latin letters, digits, whitespace and
// hyphens is dropped before the separator pass
static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Arabic}a-zA-Z0-9\s-]+").expect("static slug pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("static slug pattern"));

/// Derive a slug from a display name.
///
/// Lowercases, keeps Arabic letters, Latin letters and digits, and collapses
/// whitespace runs into single hyphens.  Idempotent: slugify(slugify(s)) ==
/// slugify(s), so a hand-edited slug round-trips through the same rule.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = STRIP.replace_all(&lowered, "");
    let joined = SEPARATORS.replace_all(stripped.trim(), "-");
    joined.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn latin_names() {
        assert_eq!(slugify("Summer Collection 2024"), "summer-collection-2024");
        assert_eq!(slugify("  Gift   Cards!  "), "gift-cards");
    }

    #[test]
    fn arabic_names() {
        assert_eq!(slugify("عروض الصيف"), "عروض-الصيف");
        assert_eq!(slugify("تخفيضات 50%"), "تخفيضات-50");
    }

    #[test]
    fn strips_symbols() {
        assert_eq!(slugify("T-Shirts & Hoodies"), "t-shirts-hoodies");
        assert_eq!(slugify("100% cotton (soft)"), "100-cotton-soft");
    }

    #[test]
    fn idempotent() {
        for s in ["Summer Collection", "عروض الصيف", "a - b", "--edgy--"] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
