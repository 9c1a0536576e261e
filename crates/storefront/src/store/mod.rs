//! Cart and wishlist store.
//!
//! The [`Store`] owns the cart, the wishlist and the cart count. Only the
//! cart and its count are persisted; the wishlist lives for the lifetime of
//! the store. The persisted snapshot is rewritten after every cart change
//! and is the only thing read back on startup.
//!
//! Nothing removes cart items or decrements the count. A malformed snapshot
//! is discarded as a whole, so `cart_count` and `cart().len()` move together.

pub mod persistence;
pub mod totals;

pub use persistence::{Restored, persist, restore};
pub use totals::{CartTotals, compute_totals};

use gaming_odyssey_core::CartItemId;

use crate::models::{CartItem, ProductSnapshot};
use crate::storage::{LocalStorage, StorageError};
use crate::ui::CartBadge;

/// Cart, wishlist and count, bound to a storage backend.
#[derive(Debug)]
pub struct Store<S> {
    storage: S,
    cart: Vec<CartItem>,
    wishlist: Vec<String>,
    cart_count: u32,
}

impl<S: LocalStorage> Store<S> {
    /// Open a store, restoring the cart from `storage`.
    pub fn open(mut storage: S) -> Self {
        let Restored { cart, cart_count } = restore(&mut storage);
        Self {
            storage,
            cart,
            wishlist: Vec::new(),
            cart_count,
        }
    }

    /// Add one unit of a product to the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written. The item stays in
    /// the in-memory cart either way.
    pub fn add_to_cart(&mut self, product: ProductSnapshot) -> Result<CartItem, StorageError> {
        let item = CartItem::from_snapshot(CartItemId::now(), product);
        self.cart.push(item.clone());
        self.cart_count = self.cart_count.saturating_add(1);

        tracing::info!(
            id = %item.id,
            name = %item.name,
            price = %item.price,
            cart_len = self.cart.len(),
            "Product added to cart"
        );

        self.persist()?;
        Ok(item)
    }

    /// Toggle a product name in the wishlist, returning the new membership.
    ///
    /// Removes the first matching entry if present, otherwise appends. The
    /// wishlist is not persisted.
    pub fn toggle_wishlist(&mut self, name: &str) -> bool {
        if let Some(pos) = self.wishlist.iter().position(|entry| entry == name) {
            self.wishlist.remove(pos);
            tracing::info!(name, "Removed from wishlist");
            false
        } else {
            self.wishlist.push(name.to_owned());
            tracing::info!(name, wishlist_len = self.wishlist.len(), "Added to wishlist");
            true
        }
    }

    /// Write the cart and count to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend rejects the write.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        persist(&mut self.storage, &self.cart, self.cart_count)
    }

    /// Totals for the current cart.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        compute_totals(&self.cart)
    }

    /// Badge view for the current count.
    #[must_use]
    pub fn badge(&self) -> CartBadge {
        CartBadge::new(self.cart_count)
    }

}

impl<S> Store<S> {
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    #[must_use]
    pub fn wishlist(&self) -> &[String] {
        &self.wishlist
    }

    #[must_use]
    pub const fn cart_count(&self) -> u32 {
        self.cart_count
    }

    #[must_use]
    pub fn is_wishlisted(&self, name: &str) -> bool {
        self.wishlist.iter().any(|entry| entry == name)
    }

    #[cfg(test)]
    pub(crate) fn into_storage(self) -> S {
        self.storage
    }

}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gaming_odyssey_core::Price;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::storage_keys;
    use crate::storage::{FileStorage, MemoryStorage};

    fn snapshot(name: &str, cents: i64) -> ProductSnapshot {
        ProductSnapshot {
            name: name.to_string(),
            price: Price::from_cents(cents),
            image: format!("https://cdn.example.com/{name}.jpg"),
        }
    }

    #[test]
    fn test_open_empty() {
        let store = Store::open(MemoryStorage::new());
        assert!(store.cart().is_empty());
        assert!(store.wishlist().is_empty());
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_add_increments_both_by_one() {
        let mut store = Store::open(MemoryStorage::new());
        for n in 1..=3 {
            let item = store.add_to_cart(snapshot("Mouse", 2999)).unwrap();
            assert_eq!(item.quantity, 1);
            assert_eq!(store.cart().len(), n);
            assert_eq!(store.cart_count() as usize, n);
        }
    }

    #[test]
    fn test_add_persists_immediately() {
        let mut store = Store::open(MemoryStorage::new());
        store.add_to_cart(snapshot("Keyboard", 12_000)).unwrap();

        let storage = store.into_storage();
        assert_eq!(
            storage.get_item(storage_keys::CART_COUNT).unwrap().as_deref(),
            Some("1")
        );
        let raw = storage.get_item(storage_keys::CART).unwrap().unwrap();
        assert!(raw.contains(r#""price":"$120.00""#));
    }

    #[test]
    fn test_cart_survives_reopen() {
        let mut store = Store::open(MemoryStorage::new());
        store.add_to_cart(snapshot("Headset", 8999)).unwrap();
        store.toggle_wishlist("Headset");

        let reopened = Store::open(store.into_storage());
        assert_eq!(reopened.cart().len(), 1);
        assert_eq!(reopened.cart_count(), 1);
        assert!(reopened.wishlist().is_empty());
    }

    #[test]
    fn test_file_backed_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");

        let mut store = Store::open(FileStorage::open(&path).unwrap());
        store.add_to_cart(snapshot("Gamepad", 5000)).unwrap();
        store.add_to_cart(snapshot("Gamepad", 5000)).unwrap();
        drop(store);

        let reopened = Store::open(FileStorage::open(&path).unwrap());
        assert_eq!(reopened.cart_count(), 2);
        assert_eq!(reopened.totals().subtotal, Decimal::new(10_000, 2));
    }

    #[test]
    fn test_corrupt_cart_keeps_count_in_step() {
        let mut storage = MemoryStorage::new();
        storage.set_item(storage_keys::CART, "[{oops").unwrap();
        storage.set_item(storage_keys::CART_COUNT, "3").unwrap();

        let mut store = Store::open(storage);
        assert_eq!(store.cart_count(), 0);

        store.add_to_cart(snapshot("Controller", 6999)).unwrap();
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_toggle_wishlist_twice() {
        let mut store = Store::open(MemoryStorage::new());
        assert!(store.toggle_wishlist("Arcade Stick"));
        assert!(store.is_wishlisted("Arcade Stick"));
        assert!(!store.toggle_wishlist("Arcade Stick"));
        assert!(!store.is_wishlisted("Arcade Stick"));
        assert!(store.wishlist().is_empty());
    }

    #[test]
    fn test_toggle_wishlist_removes_first_match_only() {
        let mut store = Store::open(MemoryStorage::new());
        store.toggle_wishlist("A");
        store.toggle_wishlist("B");
        assert!(!store.toggle_wishlist("A"));
        assert_eq!(store.wishlist(), ["B".to_string()]);
    }

    #[test]
    fn test_toggle_wishlist_does_not_persist() {
        let mut store = Store::open(MemoryStorage::new());
        store.toggle_wishlist("Poster");
        assert!(store.into_storage().is_empty());
    }

    #[test]
    fn test_totals_and_badge_follow_cart() {
        let mut store = Store::open(MemoryStorage::new());
        store.add_to_cart(snapshot("Chair", 2000)).unwrap();
        store.add_to_cart(snapshot("Desk", 9000)).unwrap();

        assert_eq!(store.totals().total, Decimal::new(12_100, 2));
        assert_eq!(store.badge().count, 2);
    }
}
