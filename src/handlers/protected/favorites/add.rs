// handlers/protected/favorites/add.rs - POST /favorites handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use super::MessageResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub product_id: Option<i64>,
    pub notes: Option<String>,
}

/// POST /favorites - add a product to the caller's favorites
///
/// Repeating the call for the same product overwrites its notes.
pub async fn favorites_post(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(request) = payload?;
    let product_id = match request.product_id {
        Some(id) if id > 0 => id,
        _ => return Err(ApiError::bad_request("Product ID is required")),
    };

    state
        .db
        .favorites()
        .upsert(user.user_id, product_id, request.notes.as_deref())
        .await?;

    Ok(ApiResponse::created(MessageResponse {
        message: "Favorite added successfully",
    }))
}
