//! Product catalog backing the product grid.
//!
//! The catalog is either the built-in merchandise list or a JSON file of
//! listings. Listings without an `id` get one from
//! [`generate_product_id`](crate::ui::generate_product_id).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use gaming_odyssey_core::Price;
use gaming_odyssey_core::price::as_display;

use crate::models::ProductCard;
use crate::ui::generate_product_id;

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A catalog entry as written in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(with = "as_display")]
    pub price: Price,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
}

impl From<Listing> for ProductCard {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.unwrap_or_else(generate_product_id),
            title: listing.title,
            price: listing.price,
            image: listing.image,
            category: listing.category,
            rating: listing.rating,
        }
    }
}

/// The ordered product grid.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductCard>,
}

impl Catalog {
    /// Build a catalog from listings, keeping their order.
    #[must_use]
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self {
            products: listings.into_iter().map(ProductCard::from).collect(),
        }
    }

    /// Load listings from a JSON array file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let listings: Vec<Listing> = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), products = listings.len(), "Loaded catalog");
        Ok(Self::from_listings(listings))
    }

    /// The built-in merchandise list.
    #[must_use]
    pub fn builtin() -> Self {
        const ITEMS: &[(&str, i64, &str, &str, f64)] = &[
            ("Pixel Hero Hoodie", 4999, "apparel", "hoodie.jpg", 4.7),
            ("Retro Console Tee", 2499, "apparel", "tee.jpg", 4.3),
            ("RGB Mechanical Keyboard", 12_999, "accessories", "keyboard.jpg", 4.8),
            ("Wireless Pro Controller", 6999, "accessories", "controller.jpg", 4.6),
            ("Surround Gaming Headset", 8999, "accessories", "headset.jpg", 4.4),
            ("Dungeon Map Poster", 1499, "collectibles", "poster.jpg", 4.1),
            ("Legendary Sword Replica", 19_999, "collectibles", "sword.jpg", 4.9),
            ("Speedrunner Mouse Pad", 1999, "accessories", "mousepad.jpg", 3.9),
        ];

        Self::from_listings(
            ITEMS
                .iter()
                .map(|&(title, cents, category, image, rating)| Listing {
                    id: None,
                    title: title.to_string(),
                    price: Price::from_cents(cents),
                    image: format!("/static/images/products/{image}"),
                    category: category.to_string(),
                    rating,
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn products(&self) -> &[ProductCard] {
        &self.products
    }

    /// Find a product by its card ID.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&ProductCard> {
        self.products.iter().find(|p| p.id == id)
    }
}
