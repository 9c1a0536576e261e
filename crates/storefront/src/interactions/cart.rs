//! Add-to-cart and wishlist handlers.

use serde::{Deserialize, Serialize};

use gaming_odyssey_core::Price;

use super::{InteractionError, ValidationError};
use crate::models::{CartItem, ProductCard, ProductSnapshot};
use crate::storage::LocalStorage;
use crate::store::Store;
use crate::ui::{CartBadge, WishlistIcon};

/// Product card fields read when "add to cart" is clicked.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
    /// Price as displayed on the card, e.g. `"$49.99"`.
    pub price: String,
    pub image: String,
}

impl AddToCartForm {
    /// Parse the displayed price into a product snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] if the price text is not a
    /// valid amount.
    pub fn into_snapshot(self) -> Result<ProductSnapshot, ValidationError> {
        let price = Price::parse(&self.price).map_err(|source| ValidationError::InvalidPrice {
            name: self.name.clone(),
            source,
        })?;

        Ok(ProductSnapshot {
            name: self.name,
            price,
            image: self.image,
        })
    }
}

/// Result of adding a product to the cart.
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartOutcome {
    pub item: CartItem,
    pub badge: CartBadge,
    pub notice: String,
}

/// Add the clicked product to the cart.
///
/// # Errors
///
/// Returns a validation error for an unparseable price (the store is left
/// untouched) or a storage error if the cart could not be saved.
pub fn add_to_cart<S: LocalStorage>(
    store: &mut Store<S>,
    form: AddToCartForm,
) -> Result<AddToCartOutcome, InteractionError> {
    let snapshot = form.into_snapshot()?;
    add_snapshot(store, snapshot)
}

/// Add a catalog product card to the cart.
///
/// # Errors
///
/// Returns a storage error if the cart could not be saved.
pub fn add_product_to_cart<S: LocalStorage>(
    store: &mut Store<S>,
    card: &ProductCard,
) -> Result<AddToCartOutcome, InteractionError> {
    add_snapshot(store, card.snapshot())
}

fn add_snapshot<S: LocalStorage>(
    store: &mut Store<S>,
    snapshot: ProductSnapshot,
) -> Result<AddToCartOutcome, InteractionError> {
    let item = store.add_to_cart(snapshot)?;

    Ok(AddToCartOutcome {
        notice: format!("{} has been added to your cart!", item.name),
        badge: store.badge(),
        item,
    })
}

/// Result of clicking a wishlist heart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistOutcome {
    pub name: String,
    pub wishlisted: bool,
    pub icon: WishlistIcon,
    /// Heart shown on the card.
    pub glyph: &'static str,
    pub wishlist: Vec<String>,
}

/// Toggle the clicked product in the wishlist.
pub fn toggle_wishlist<S: LocalStorage>(store: &mut Store<S>, name: &str) -> WishlistOutcome {
    let wishlisted = store.toggle_wishlist(name);
    let icon = WishlistIcon::for_membership(wishlisted);

    WishlistOutcome {
        name: name.to_owned(),
        wishlisted,
        icon,
        glyph: icon.glyph(),
        wishlist: store.wishlist().to_vec(),
    }
}
