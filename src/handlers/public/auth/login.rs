// handlers/public/auth/login.rs - POST /login handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::{error, info, warn};

use super::Credentials;
use crate::app::AppState;
use crate::auth::verify_password;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login - exchange username and password for a bearer token
///
/// Unknown users, wrong passwords and a failed user lookup all get the
/// same 401 so the response never reveals which usernames exist.
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let Json(credentials) = payload?;
    if !credentials.is_complete() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let user = match state.db.users().find_by_username(&credentials.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("Login failed for unknown user '{}'", credentials.username);
            return Err(ApiError::unauthorized("Invalid credentials"));
        }
        Err(e) => {
            error!("Login lookup failed for user '{}': {}", credentials.username, e);
            return Err(ApiError::unauthorized("Invalid credentials"));
        }
    };

    if !verify_password(&credentials.password, &user.password) {
        warn!("Login failed for user '{}': wrong password", credentials.username);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue_token(user.id)?;
    info!("User '{}' logged in", user.username);

    Ok(ApiResponse::success(LoginResponse { token }))
}
