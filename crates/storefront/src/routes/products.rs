//! Product grid route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::extract::AppQuery;
use crate::interactions::{self, AddToCartOutcome, CategoryFilter, ProductGrid, SortKey};
use crate::state::AppState;

/// Product grid query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    /// Category to show; `all` or absent shows every product.
    pub category: Option<String>,
    /// `price-low`, `price-high` or `rating`; anything else keeps catalog order.
    pub sort_by: Option<String>,
}

/// Filtered and sorted product grid with wishlist state.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ProductQuery>,
) -> Json<ProductGrid> {
    let filter = query
        .category
        .as_deref()
        .map_or(CategoryFilter::All, CategoryFilter::parse);
    let key = query.sort_by.as_deref().map_or_else(SortKey::default, SortKey::parse);

    let mut grid = ProductGrid::build(state.catalog().products(), &filter, key);
    grid.mark_wishlisted(&*state.store().await);
    Json(grid)
}

/// Add a catalog product to the cart by its card ID.
#[instrument(skip(state))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AddToCartOutcome>> {
    let card = state
        .catalog()
        .find_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let mut store = state.store().await;
    let outcome = interactions::add_product_to_cart(&mut *store, card)?;
    Ok(Json(outcome))
}
