// handlers/protected/favorites/remove.rs - DELETE /favorites/:product_id handler

use axum::extract::{rejection::PathRejection, Path, State};

use super::MessageResponse;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

pub async fn favorite_delete(
    State(state): State<AppState>,
    user: AuthUser,
    product_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let Path(product_id) = product_id?;
    state.db.favorites().remove(user.user_id, product_id).await?;

    Ok(ApiResponse::success(MessageResponse {
        message: "Favorite removed successfully",
    }))
}
