//! Product model.

use serde::{Deserialize, Serialize};

use crate::ids;

/// Product entity
///
/// `image` holds either a URL or an embedded `data:` URI; the asset extraction
/// pass in the generator splits the latter out into real files at build time.
/// `category` is free text matched against Category.name, not a foreign key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub category: String,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_on_sale: bool,
    pub discount_percentage: Option<u32>,
    pub tags: Vec<String>,
}

impl Product {
    pub fn new(name: String, price: f64) -> Self {
        Product {
            id: ids::next_id(),
            name,
            price,
            ..Default::default()
        }
    }

    /// Display price, two decimals.
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// True when there is a struck-through original price to show.
    pub fn has_discount(&self) -> bool {
        match self.original_price {
            Some(original) => original > self.price,
            None => false,
        }
    }
}
