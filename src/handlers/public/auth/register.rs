// handlers/public/auth/register.rs - POST /register handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use super::Credentials;
use crate::app::AppState;
use crate::auth::hash_password;
use crate::database::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /register - create an account; responds with `{id, username}`
pub async fn register_post(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<User> {
    let Json(credentials) = payload?;
    if !credentials.is_complete() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let digest = hash_password(&credentials.password)?;
    let user = state.db.users().create(&credentials.username, &digest).await?;
    info!("Registered user '{}' with id {}", user.username, user.id);

    Ok(ApiResponse::created(user))
}
