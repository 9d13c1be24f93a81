//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring behind the router
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// `seed_demo` preloads the store with the demo campus dataset.
pub fn build_app(seed_demo: bool) -> Router {
    let services = Arc::new(services::build_services(seed_demo));

    // User-scoped routes: require a caller-supplied user context.
    let user_scoped = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(
            middleware::user_context_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(user_scoped)
        .layer(ServiceBuilder::new())
}
