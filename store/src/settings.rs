//! Store settings: identity, theme, section templates and per-section content.
//!
//! Every struct here derives its structural defaults through serde, so a
//! partial aggregate (an old backup, a hand-edited file, a previous app
//! version's local storage) always deserializes into a fully-formed settings
//! tree.  That single normalization pass is what lets the generators stay
//! plain string builders with no defensive lookups.

use serde::{Deserialize, Serialize};

/// Section ids understood by the home page assembler, in default order.
///
/// `StoreSettings::sections` stores plain strings so that an unknown id (from
/// a newer or older build) is skipped at generation time rather than rejected
/// at parse time.
pub const DEFAULT_SECTION_ORDER: [&str; 8] = [
    "hero",
    "featured-products",
    "categories",
    "best-sellers",
    "on-sale",
    "about",
    "features",
    "faq",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub name: String,
    pub description: String,
    /// URL or data URI; empty string means "no logo".
    pub logo: String,
    pub favicon: String,

    // visual theme
    pub theme_id: String,
    pub colors: ColorOverrides,
    pub font_family: String,

    // template variant per section, resolved by the generator's selectors
    pub header_template: String,
    pub hero_template: String,
    pub footer_template: String,
    pub about_template: String,
    pub features_template: String,
    pub faq_template: String,

    /// Ordered section ids rendered on the home page.
    pub sections: Vec<String>,

    pub contact: ContactInfo,
    pub whatsapp: WhatsappSettings,

    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub features: FeaturesConfig,
    pub faq: FaqConfig,

    pub featured_section: ProductSectionConfig,
    pub best_sellers_section: ProductSectionConfig,
    pub on_sale_section: ProductSectionConfig,

    pub search: SearchSettings,
    pub category_display: CategoryDisplaySettings,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: "My Store".into(),
            description: String::new(),
            logo: String::new(),
            favicon: String::new(),
            theme_id: "ocean".into(),
            colors: ColorOverrides::default(),
            font_family: "'Segoe UI', Tahoma, sans-serif".into(),
            header_template: "classic".into(),
            hero_template: "classic".into(),
            footer_template: "classic".into(),
            about_template: "classic".into(),
            features_template: "classic".into(),
            faq_template: "classic".into(),
            sections: DEFAULT_SECTION_ORDER.iter().map(|s| s.to_string()).collect(),
            contact: ContactInfo::default(),
            whatsapp: WhatsappSettings::default(),
            hero: HeroConfig::default(),
            about: AboutConfig::default(),
            features: FeaturesConfig::default(),
            faq: FaqConfig::default(),
            featured_section: ProductSectionConfig::featured(),
            best_sellers_section: ProductSectionConfig::best_sellers(),
            on_sale_section: ProductSectionConfig::on_sale(),
            search: SearchSettings::default(),
            category_display: CategoryDisplaySettings::default(),
        }
    }
}

/// Optional per-color overrides layered on top of the selected theme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// WhatsApp deep-link configuration.
///
/// The message template carries `{productName}`, `{productPrice}`,
/// `{productDescription}`, `{storeName}` and `{productLink}` tokens; each is
/// substituted only when its include flag is on.  A disabled token is left in
/// the output verbatim -- the admin sees it literally in the preview, which is
/// the cue to either enable the flag or edit the template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsappSettings {
    pub enabled: bool,
    /// Used verbatim in the wa.me link; no format validation.
    pub phone_number: String,
    pub message_template: String,
    pub include_product_name: bool,
    pub include_product_price: bool,
    pub include_product_description: bool,
    pub include_store_name: bool,
    pub include_product_link: bool,
}

impl Default for WhatsappSettings {
    fn default() -> Self {
        WhatsappSettings {
            enabled: false,
            phone_number: String::new(),
            message_template: "Hello! I'm interested in {productName} ({productPrice}) from {storeName}.".into(),
            include_product_name: true,
            include_product_price: true,
            include_product_description: false,
            include_store_name: true,
            include_product_link: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    /// URL or data URI; empty means the themed gradient background.
    pub background_image: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        HeroConfig {
            enabled: true,
            title: "Welcome to our store".into(),
            subtitle: "Quality products, fair prices".into(),
            button_text: "Shop now".into(),
            button_link: "products.html".into(),
            background_image: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

impl Default for StatItem {
    fn default() -> Self {
        StatItem {
            value: "0".into(),
            label: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub enabled: bool,
    pub title: String,
    pub text: String,
    pub image: String,
    pub stats: Vec<StatItem>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        AboutConfig {
            enabled: true,
            title: "About us".into(),
            text: String::new(),
            image: String::new(),
            stats: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FeatureItem>,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        FeaturesConfig {
            enabled: true,
            title: "Why choose us".into(),
            subtitle: String::new(),
            items: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    pub enabled: bool,
    pub title: String,
    pub items: Vec<FaqItem>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        FaqConfig {
            enabled: true,
            title: "Frequently asked questions".into(),
            items: Vec::new(),
        }
    }
}

/// One of the three flag-driven product strips on the home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSectionConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    /// First N matching products, in aggregate array order.
    pub limit: usize,
}

impl ProductSectionConfig {
    pub fn featured() -> Self {
        ProductSectionConfig {
            enabled: true,
            title: "Featured products".into(),
            subtitle: String::new(),
            limit: 4,
        }
    }

    pub fn best_sellers() -> Self {
        ProductSectionConfig {
            enabled: true,
            title: "Best sellers".into(),
            subtitle: String::new(),
            limit: 4,
        }
    }

    pub fn on_sale() -> Self {
        ProductSectionConfig {
            enabled: true,
            title: "On sale".into(),
            subtitle: String::new(),
            limit: 4,
        }
    }
}

impl Default for ProductSectionConfig {
    fn default() -> Self {
        ProductSectionConfig::featured()
    }
}

/// Weighted field toggle for the client-side product search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeight {
    pub enabled: bool,
    pub weight: u32,
}

impl FieldWeight {
    fn new(enabled: bool, weight: u32) -> Self {
        FieldWeight { enabled, weight }
    }
}

impl Default for FieldWeight {
    fn default() -> Self {
        FieldWeight::new(true, 1)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub enabled: bool,
    pub name: FieldWeight,
    pub description: FieldWeight,
    pub category: FieldWeight,
    pub tags: FieldWeight,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            enabled: true,
            name: FieldWeight::new(true, 3),
            description: FieldWeight::new(true, 1),
            category: FieldWeight::new(true, 2),
            tags: FieldWeight::new(false, 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDisplaySettings {
    pub enabled: bool,
    pub title: String,
    /// "grid" or "list"; anything else falls back to grid at render time.
    pub style: String,
    pub show_product_counts: bool,
}

impl Default for CategoryDisplaySettings {
    fn default() -> Self {
        CategoryDisplaySettings {
            enabled: true,
            title: "Shop by category".into(),
            style: "grid".into(),
            show_product_counts: true,
        }
    }
}
