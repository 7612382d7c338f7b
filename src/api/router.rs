use axum::{routing::get, Router};
use std::sync::Arc;
use super::AppState;
use super::handlers;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/users/{username}", get(handlers::users::get_user))
        .with_state(state)
        // Unmatched paths, including `/users/` with an empty segment
        .fallback(handlers::not_found)
        // Known paths with an unsupported method answer the same way
        .method_not_allowed_fallback(handlers::not_found)
}
