// handlers/protected/favorites/list.rs - GET /favorites handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::FavoriteProduct;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

pub async fn favorites_get(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Vec<FavoriteProduct>> {
    let favorites = state.db.favorites().list_for_user(user.user_id).await?;
    Ok(ApiResponse::success(favorites))
}
