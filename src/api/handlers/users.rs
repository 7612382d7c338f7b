use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::AppState;
use crate::directory::UserRecord;
use crate::error::{AppError, AppResult};
use crate::events;

/// `GET /users/{username}`. The segment arrives percent-decoded and is
/// otherwise passed through untouched.
///
/// A segment that cannot be decoded (e.g. invalid UTF-8) cannot name any
/// stored user, so it is reported as not found.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    username: Result<Path<String>, PathRejection>,
) -> AppResult<Json<UserRecord>> {
    let Path(username) = username.map_err(|rejection| {
        tracing::info!(
            event = events::USER_LOOKUP_FAILED,
            reason = "undecodable_path",
            error = %rejection.body_text(),
            "User not found"
        );
        AppError::UserNotFound
    })?;

    state.directory.lookup_user(&username).map(Json)
}
