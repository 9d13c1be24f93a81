use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use campusfind_core::UserId;

use crate::context::UserContext;

/// Header carrying the calling user's id (UUID).
pub const USER_ID_HEADER: &str = "x-user-id";

/// Require a well-formed `X-User-Id` header and attach a [`UserContext`]
/// extension for downstream handlers.
pub async fn user_context_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user_id = extract_user_id(req.headers())?;

    req.extensions_mut().insert(UserContext::new(user_id));

    Ok(next.run(req).await)
}

fn extract_user_id(headers: &HeaderMap) -> Result<UserId, StatusCode> {
    let header = headers
        .get(USER_ID_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let value = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    value
        .trim()
        .parse::<UserId>()
        .map_err(|_| StatusCode::UNAUTHORIZED)
}
