//! Custom page model.

use serde::{Deserialize, Serialize};

use crate::{ids, slug};

/// Custom page entity
///
/// `content` is freeform HTML, written by the store owner and embedded into
/// the generated site as-is.  The owner is the trust boundary; nothing here
/// sanitizes it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomPage {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_published: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl CustomPage {
    pub fn new(title: String) -> Self {
        let now = ids::now_millis();
        CustomPage {
            id: ids::next_id(),
            slug: slug::slugify(&title),
            title,
            is_published: true,
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = ids::now_millis();
    }
}
