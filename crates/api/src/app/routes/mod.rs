use axum::Router;

use stockroom_storage::BlobStore;

pub mod items;
pub mod system;

/// Routes operating on the shared store.
pub fn router<B: BlobStore + 'static>() -> Router {
    items::router::<B>()
}
