use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use stockroom_core::{ItemId, StoreError};
use stockroom_inventory::export_file_name;
use stockroom_storage::BlobStore;

use crate::app::{SharedStore, dto, errors};

pub fn router<B: BlobStore + 'static>() -> Router {
    Router::new()
        .route("/items", get(list_items::<B>).post(create_item::<B>))
        .route("/items/summary", get(get_summary::<B>))
        .route("/items/categories", get(get_categories::<B>))
        .route(
            "/items/:id",
            get(get_item::<B>).put(update_item::<B>).delete(delete_item::<B>),
        )
        .route("/export/json", get(export_json::<B>))
        .route("/export/csv", get(export_csv::<B>))
        .route("/import", post(import_json::<B>))
}

pub async fn list_items<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    let sort = match errors::parse_sort_order(query.sort.as_deref()) {
        Ok(sort) => sort,
        Err(resp) => return resp,
    };

    let store = store.lock().await;
    Json(store.list(&query.filter(), sort)).into_response()
}

pub async fn create_item<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    let mut store = store.lock().await;
    match store.create(body.into_draft()) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => errors::store_error_response(e),
    }
}

pub async fn get_item<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let store = store.lock().await;
    match store.get(&id) {
        Some(record) => Json(record.clone()).into_response(),
        None => errors::store_error_response(StoreError::NotFound),
    }
}

pub async fn update_item<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut store = store.lock().await;
    match store.update(&id, body.into_draft()) {
        Ok(record) => Json(record).into_response(),
        Err(e) => errors::store_error_response(e),
    }
}

pub async fn delete_item<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut store = store.lock().await;
    match store.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_response(e),
    }
}

pub async fn get_summary<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
) -> axum::response::Response {
    let store = store.lock().await;
    Json(store.summary()).into_response()
}

pub async fn get_categories<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
) -> axum::response::Response {
    let store = store.lock().await;
    Json(store.categories()).into_response()
}

pub async fn export_json<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
) -> axum::response::Response {
    let store = store.lock().await;
    match store.export_json() {
        Ok(body) => attachment(body, "application/json", "json"),
        Err(e) => errors::store_error_response(e),
    }
}

pub async fn export_csv<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
) -> axum::response::Response {
    let store = store.lock().await;
    match store.export_csv() {
        Ok(body) => attachment(body, "text/csv", "csv"),
        Err(e) => errors::store_error_response(e),
    }
}

/// The upload boundary of the original UI: receive the document, resume with
/// the store's import.
pub async fn import_json<B: BlobStore + 'static>(
    Extension(store): Extension<SharedStore<B>>,
    body: String,
) -> axum::response::Response {
    let mut store = store.lock().await;
    match store.import_json(&body) {
        Ok(imported) => Json(serde_json::json!({ "imported": imported })).into_response(),
        Err(e) => errors::store_error_response(e),
    }
}

fn parse_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id")
    })
}

fn attachment(body: String, content_type: &'static str, extension: &str) -> axum::response::Response {
    let file_name = export_file_name(extension, Utc::now().date_naive());
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}
