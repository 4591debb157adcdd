//! Navigation link model, used by the generated header and footer.

use serde::{Deserialize, Serialize};

use crate::ids;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// In-page anchor on the generated home page, e.g. `#about`.
    #[default]
    Anchor,
    /// Absolute URL to somewhere else.
    External,
    /// One of the store's custom pages, by slug.
    Page,
    /// A category filter on the products listing page.
    Category,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkItem {
    pub id: String,
    pub text: String,
    pub url: String,
    pub link_type: LinkType,
    pub is_visible: bool,
    pub order: i32,
}

impl LinkItem {
    pub fn new(text: String, url: String, link_type: LinkType) -> Self {
        LinkItem {
            id: ids::next_id(),
            text,
            url,
            link_type,
            is_visible: true,
            order: 0,
        }
    }

    /// The href this link resolves to in the generated site.
    pub fn href(&self) -> String {
        match self.link_type {
            LinkType::Anchor | LinkType::External => self.url.clone(),
            LinkType::Page => format!("{}.html", self.url),
            LinkType::Category => format!("products.html?category={}", self.url),
        }
    }
}
