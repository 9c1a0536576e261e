//! Domain models for the storefront.

pub mod cart;
pub mod product;

pub use cart::{CartItem, ProductSnapshot};
pub use product::ProductCard;

/// Local storage keys for persisted cart state.
pub mod storage_keys {
    /// Key for the cart, stored as a JSON array of cart items.
    pub const CART: &str = "gamingOdysseyCart";

    /// Key for the cart count, stored as a decimal string.
    pub const CART_COUNT: &str = "gamingOdysseyCartCount";
}
