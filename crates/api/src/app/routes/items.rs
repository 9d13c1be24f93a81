use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use campusfind_core::ItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::UserContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(report_item))
        .route("/:id", get(get_item))
        .route("/:id/claim", post(claim_item))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListItemsQuery>,
) -> axum::response::Response {
    let filter = match query.into_filter() {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match services.store().list(&filter) {
        Ok(items) => (StatusCode::OK, Json(dto::items_to_json(&items))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn report_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Json(body): Json<dto::ReportItemRequest>,
) -> axum::response::Response {
    let report = match body.into_report() {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let item = match services.store().create(report, user.user_id()) {
        Ok(item) => item,
        Err(e) => return errors::store_error_to_response(e),
    };

    tracing::info!(item_id = %item.id(), reporter_id = %user.user_id(), "new item reported");

    (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let item_id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };

    match services.store().get_by_id(item_id) {
        Ok(Some(item)) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn claim_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Path(id): Path<String>,
    body: Option<Json<dto::ClaimItemRequest>>,
) -> axum::response::Response {
    let item_id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };

    if let Some(message) = body.as_ref().and_then(|b| b.message.as_deref()) {
        tracing::info!(%item_id, claimer_id = %user.user_id(), message, "claim message attached");
    }

    match services.store().claim(item_id, user.user_id()) {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "id": item_id.to_string(),
                "claimed": true,
            })),
        )
            .into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
