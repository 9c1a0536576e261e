//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Cart
//! GET  /cart                   - Cart items, count and totals
//! POST /cart/add               - Add to cart (JSON {name, price, image})
//! GET  /cart/count             - Cart count badge
//! GET  /cart/totals            - Subtotal, tax, shipping, total
//!
//! # Wishlist
//! GET  /wishlist               - Wishlisted product names
//! POST /wishlist/toggle        - Toggle a product (JSON {name})
//!
//! # Products
//! GET  /products               - Product grid (?category=&sort_by=)
//! POST /products/{id}/cart     - Add a catalog product to the cart
//!
//! # Forms
//! GET  /search                 - Search notice (?q=)
//! POST /newsletter             - Newsletter signup (JSON {email})
//! POST /contact                - Contact form (JSON {name, email, message})
//!
//! # Quiz
//! GET  /quiz                   - Recommendation quiz questions
//! ```

pub mod cart;
pub mod contact;
pub mod newsletter;
pub mod products;
pub mod quiz;
pub mod search;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}/cart", post(products::add_to_cart))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
        .route("/totals", get(cart::totals))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/toggle", post(wishlist::toggle))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .route("/search", get(search::search))
        .route("/newsletter", post(newsletter::subscribe))
        .route("/contact", post(contact::submit))
        .route("/quiz", get(quiz::show))
}
