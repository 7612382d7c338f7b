use crate::error::AppError;

pub mod health;
pub mod users;

pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
