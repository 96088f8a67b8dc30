use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::StoreError;
use stockroom_inventory::SortOrder;

pub fn store_error_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        StoreError::Format(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "format_error", msg),
        StoreError::Schema(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "schema_error", msg),
        StoreError::EmptyCollection => {
            json_error(StatusCode::CONFLICT, "empty_collection", "nothing to export")
        }
        StoreError::Persistence(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "persistence_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_sort_order(s: Option<&str>) -> Result<SortOrder, axum::response::Response> {
    match s.unwrap_or("insertion") {
        "insertion" => Ok(SortOrder::Insertion),
        "name" => Ok(SortOrder::Name),
        "quantity" => Ok(SortOrder::Quantity),
        "date" => Ok(SortOrder::DateAdded),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "invalid_sort",
            "sort must be one of: insertion, name, quantity, date",
        )),
    }
}
