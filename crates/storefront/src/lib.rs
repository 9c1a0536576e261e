//! Gaming Odyssey Storefront library.
//!
//! The cart/wishlist store, the UI event handlers and the JSON HTTP surface
//! over them. The binary in `main.rs` only wires configuration, telemetry
//! and the listener around [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod interactions;
pub mod middleware;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

use axum::{Router, body::Body, http::Request, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the storefront router with its request tracing stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
