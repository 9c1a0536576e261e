//! Product card shown in the product grid.

use serde::{Deserialize, Serialize};

use gaming_odyssey_core::Price;
use gaming_odyssey_core::price::as_display;

use super::ProductSnapshot;

/// A product card: what the grid renders and what add-to-cart reads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Catalog ID (`PROD-<millis>-<suffix>`).
    pub id: String,
    /// Product title.
    pub title: String,
    /// Unit price.
    #[serde(with = "as_display")]
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Category tag used by the category filter.
    pub category: String,
    /// Average rating used by the rating sort.
    pub rating: f64,
}

impl ProductCard {
    /// The data add-to-cart extracts from this card.
    #[must_use]
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            name: self.title.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}
