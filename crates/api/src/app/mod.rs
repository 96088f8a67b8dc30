//! HTTP application wiring (Axum router).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use stockroom_inventory::InventoryStore;
use stockroom_storage::BlobStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared handle to the store: one logical writer behind an async mutex.
pub type SharedStore<B> = Arc<Mutex<InventoryStore<B>>>;

/// Build the full HTTP router around one store (public entrypoint used by
/// `main.rs` and the black-box tests).
pub fn build_app<B>(store: InventoryStore<B>) -> Router
where
    B: BlobStore + 'static,
{
    let shared: SharedStore<B> = Arc::new(Mutex::new(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router::<B>())
        .layer(Extension(shared))
}
