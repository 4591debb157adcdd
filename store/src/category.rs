//! Category model.

use serde::{Deserialize, Serialize};

use crate::{ids, slug};

/// Category entity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Derived from the name unless hand-overridden in the form.
    pub slug: String,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Category {
    pub fn new(name: String) -> Self {
        let now = ids::now_millis();
        Category {
            id: ids::next_id(),
            slug: slug::slugify(&name),
            name,
            is_visible: true,
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = ids::now_millis();
    }
}
