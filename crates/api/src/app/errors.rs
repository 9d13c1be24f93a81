use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use campusfind_core::DomainError;
use campusfind_items::{Category, ItemStatus};
use campusfind_store::StoreError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

/// Store failures are transient by contract; tell the caller to retry.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Unavailable(msg) => json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "store_unavailable",
            format!("item store temporarily unavailable ({msg}); retry the request"),
        ),
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

pub fn parse_category(s: &str) -> Result<Category, axum::response::Response> {
    s.parse::<Category>().map_err(domain_error_to_response)
}

pub fn parse_status(s: &str) -> Result<ItemStatus, axum::response::Response> {
    s.parse::<ItemStatus>().map_err(domain_error_to_response)
}
