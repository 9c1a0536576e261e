//! Integration tests for Gaming Odyssey.
//!
//! Tests drive the storefront router in-process with
//! `tower::ServiceExt::oneshot`; no listener or network is involved.
//!
//! ```bash
//! cargo test -p gaming-odyssey-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use gaming_odyssey_storefront::catalog::Catalog;
use gaming_odyssey_storefront::models::storage_keys;
use gaming_odyssey_storefront::state::{AppState, DynStorage};
use gaming_odyssey_storefront::storage::{FileStorage, LocalStorage, MemoryStorage};

/// Response status and body from one request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not JSON.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

/// A storefront router plus the state behind it.
pub struct TestContext {
    pub state: AppState,
    router: Router,
}

impl TestContext {
    /// In-memory storage and the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Box::new(MemoryStorage::new()), Catalog::builtin())
    }

    /// File-backed storage under `dir` and the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the storage file cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn file_backed(dir: &Path) -> (Self, PathBuf) {
        let path = dir.join("storefront.json");
        let storage = FileStorage::open(&path).expect("failed to open storage file");
        (
            Self::with_parts(Box::new(storage), Catalog::builtin()),
            path,
        )
    }

    #[must_use]
    pub fn with_parts(storage: DynStorage, catalog: Catalog) -> Self {
        let state = AppState::new(storage, catalog);
        let router = gaming_odyssey_storefront::app(state.clone());
        Self { state, router }
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    #[allow(clippy::expect_used)]
    pub async fn send(&self, method: Method, uri: &str, body: Option<&Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// Whether either cart slot has ever been written to the file at `path`.
///
/// # Panics
///
/// Panics if the storage file exists but cannot be read.
#[must_use]
#[allow(clippy::expect_used)]
pub fn cart_slots_written(path: &Path) -> bool {
    let storage = FileStorage::open(path).expect("failed to reopen storage file");
    [storage_keys::CART, storage_keys::CART_COUNT]
        .iter()
        .any(|key| storage.get_item(key).expect("storage read failed").is_some())
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
