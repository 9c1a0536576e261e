//! Cart types.

use serde::{Deserialize, Serialize};

use gaming_odyssey_core::price::as_display;
use gaming_odyssey_core::{CartItemId, Price};

/// Product data read off a product card at the moment it is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    /// Product title.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Product image URL.
    pub image: String,
}

/// One product instance in the cart.
///
/// Serialized as `{id, name, price, image, quantity}` with the price in its
/// display form, which is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Creation-timestamp ID. Not unique across same-millisecond adds.
    pub id: CartItemId,
    /// Product title.
    pub name: String,
    /// Unit price.
    #[serde(with = "as_display")]
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Units of this product; items are always created with 1.
    pub quantity: u32,
}

impl CartItem {
    /// Build a single-unit cart item from a product snapshot.
    #[must_use]
    pub fn from_snapshot(id: CartItemId, product: ProductSnapshot) -> Self {
        Self {
            id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity: 1,
        }
    }
}
