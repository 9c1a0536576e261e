//! Search route handler.

use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::extract::AppQuery;
use crate::interactions::{self, SearchOutcome};

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Validate a search and return the notice to show.
///
/// Search only acknowledges the query; results are browsed on the products
/// page.
#[instrument(skip(query), fields(q = %query.q))]
pub async fn search(AppQuery(query): AppQuery<SearchQuery>) -> Result<Json<SearchOutcome>> {
    Ok(Json(interactions::search(&query.q)?))
}
