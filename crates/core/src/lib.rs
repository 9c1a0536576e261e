//! Gaming Odyssey Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! - `storefront` - Cart/wishlist store, UI event handlers, and the HTTP shell
//! - `integration-tests` - In-process tests of the HTTP surface
//!
//! # Architecture
//!
//! The core crate contains only types and parsing - no I/O, no storage access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
