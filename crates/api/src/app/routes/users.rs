use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::UserContext;

/// The caller's items, partitioned by role (reported / found / claimed).
/// Partitions overlap when the user holds several roles on one item.
pub async fn my_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
) -> axum::response::Response {
    match services.store().list_by_user(user.user_id()) {
        Ok(partitions) => {
            (StatusCode::OK, Json(dto::user_items_to_json(&partitions))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
