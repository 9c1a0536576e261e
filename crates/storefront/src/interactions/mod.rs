//! UI event handlers.
//!
//! Each handler takes a plain input record (already pulled out of the page
//! or request) and returns an outcome record describing what the page should
//! show. Handlers that touch cart state take the [`Store`](crate::store::Store)
//! by mutable reference; the rest are pure.
//!
//! Validation failures are returned as [`ValidationError`], whose display
//! text is the notice shown to the user. A failed validation never mutates
//! the store.

pub mod cart;
pub mod forms;
pub mod products;

pub use cart::{
    AddToCartForm, AddToCartOutcome, WishlistOutcome, add_product_to_cart, add_to_cart,
    toggle_wishlist,
};
pub use forms::{
    ContactForm, ContactSubmission, NewsletterOutcome, SearchOutcome, newsletter_signup, search,
    validate_contact_form,
};
pub use products::{CategoryFilter, ProductGrid, SortKey, filter_products, sort_products};

use thiserror::Error;

use gaming_odyssey_core::PriceError;

use crate::storage::StorageError;

/// User-input validation failures. The message is the user-facing notice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a search term!")]
    EmptySearch,

    #[error("Please enter your email address!")]
    EmptyEmail,

    #[error("Please enter a valid email address!")]
    InvalidEmail,

    #[error("Please fill in all fields!")]
    MissingContactFields,

    #[error("{name} has an invalid price: {source}")]
    InvalidPrice {
        name: String,
        #[source]
        source: PriceError,
    },
}

/// Errors from handlers that touch the store.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to save cart: {0}")]
    Storage(#[from] StorageError),
}
