//! Reading and writing the cart snapshot.

use crate::models::{CartItem, storage_keys};
use crate::storage::{LocalStorage, StorageError};

/// Cart state read back from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restored {
    pub cart: Vec<CartItem>,
    pub cart_count: u32,
}

/// Write the cart and its count to their storage slots.
///
/// # Errors
///
/// Returns an error if either slot cannot be written.
pub fn persist<S: LocalStorage + ?Sized>(
    storage: &mut S,
    cart: &[CartItem],
    cart_count: u32,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(cart)?;
    storage.set_item(storage_keys::CART, &json)?;
    storage.set_item(storage_keys::CART_COUNT, &cart_count.to_string())?;
    Ok(())
}

/// Read the cart and its count back from storage.
///
/// Missing slots default to an empty cart and a zero count. If either slot
/// cannot be read or parsed, both slots are logged, removed, and the store
/// starts empty, so the count never drifts from the cart.
pub fn restore<S: LocalStorage + ?Sized>(storage: &mut S) -> Restored {
    let cart = read_slot(storage, storage_keys::CART, |raw| {
        serde_json::from_str::<Vec<CartItem>>(raw).map_err(|e| e.to_string())
    });
    let cart_count = read_slot(storage, storage_keys::CART_COUNT, |raw| {
        raw.trim().parse::<u32>().map_err(|e| e.to_string())
    });

    match (cart, cart_count) {
        (Ok(cart), Ok(cart_count)) => {
            let restored = Restored {
                cart: cart.unwrap_or_default(),
                cart_count: cart_count.unwrap_or(0),
            };
            tracing::debug!(
                items = restored.cart.len(),
                cart_count = restored.cart_count,
                "Restored cart from storage"
            );
            restored
        }
        (cart, cart_count) => {
            if let Err(reason) = cart {
                tracing::warn!(key = storage_keys::CART, %reason, "Malformed storage slot");
            }
            if let Err(reason) = cart_count {
                tracing::warn!(key = storage_keys::CART_COUNT, %reason, "Malformed storage slot");
            }
            discard(storage);
            Restored::default()
        }
    }
}

/// `Ok(None)` for a missing slot, `Err` with the reason for a bad one.
fn read_slot<S, T, F>(storage: &S, key: &str, parse: F) -> Result<Option<T>, String>
where
    S: LocalStorage + ?Sized,
    F: FnOnce(&str) -> Result<T, String>,
{
    match storage.get_item(key) {
        Ok(Some(raw)) => parse(&raw).map(Some),
        Ok(None) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

fn discard<S: LocalStorage + ?Sized>(storage: &mut S) {
    tracing::warn!("Discarding persisted cart; starting empty");
    for key in [storage_keys::CART, storage_keys::CART_COUNT] {
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, error = %e, "Failed to remove storage slot");
        }
    }
}
