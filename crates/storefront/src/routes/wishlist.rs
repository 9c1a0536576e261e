//! Wishlist route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::extract::AppJson;
use crate::interactions::{self, WishlistOutcome};
use crate::state::AppState;

/// Wishlist toggle request.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WishlistView {
    pub wishlist: Vec<String>,
}

/// List wishlisted product names in insertion order.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<WishlistView> {
    Json(WishlistView {
        wishlist: state.store().await.wishlist().to_vec(),
    })
}

/// Flip a product's wishlist membership.
#[instrument(skip(state, form), fields(product = %form.name))]
pub async fn toggle(
    State(state): State<AppState>,
    AppJson(form): AppJson<ToggleForm>,
) -> Json<WishlistOutcome> {
    let mut store = state.store().await;
    Json(interactions::toggle_wishlist(&mut *store, &form.name))
}
