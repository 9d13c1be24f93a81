use axum::{routing::get, Router};

pub mod items;
pub mod system;
pub mod users;

/// Router for all user-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/my-items", get(users::my_items))
        .nest("/items", items::router())
}
