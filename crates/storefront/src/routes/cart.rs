//! Cart route handlers.
//!
//! The cart is the persisted [`Store`](crate::store::Store) cart. Every
//! handler holds the store lock for its whole read or mutation.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::extract::AppJson;
use crate::interactions::{self, AddToCartForm, AddToCartOutcome};
use crate::models::CartItem;
use crate::state::AppState;
use crate::store::CartTotals;
use crate::ui::CartBadge;

/// Cart contents with badge and totals.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub count: u32,
    pub totals: CartTotals,
}

/// Show the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let store = state.store().await;

    Json(CartView {
        items: store.cart().to_vec(),
        count: store.cart_count(),
        totals: store.totals(),
    })
}

/// Add a product to the cart.
#[instrument(skip(state, form), fields(product = %form.name))]
pub async fn add(
    State(state): State<AppState>,
    AppJson(form): AppJson<AddToCartForm>,
) -> Result<Json<AddToCartOutcome>> {
    let mut store = state.store().await;
    let outcome = interactions::add_to_cart(&mut *store, form)?;
    Ok(Json(outcome))
}

/// Cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartBadge> {
    Json(state.store().await.badge())
}

/// Subtotal, tax, shipping and total for the current cart.
#[instrument(skip(state))]
pub async fn totals(State(state): State<AppState>) -> Json<CartTotals> {
    Json(state.store().await.totals())
}
