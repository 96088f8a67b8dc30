use stockroom_inventory::{InventoryStore, STORAGE_SLOT};
use stockroom_storage::FileBlobStore;

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let blob = match std::env::var("STOCKROOM_DATA_DIR") {
        Ok(dir) => FileBlobStore::in_dir(dir, STORAGE_SLOT),
        Err(_) => {
            FileBlobStore::open_default(STORAGE_SLOT).expect("failed to resolve data directory")
        }
    };

    let (store, restored) = InventoryStore::open(blob);
    match restored {
        Ok(()) => tracing::info!(items = store.len(), "inventory restored"),
        Err(e) => tracing::warn!("starting with an empty inventory: {e}"),
    }

    let app = stockroom_api::app::build_app(store);

    let addr = std::env::var("STOCKROOM_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
