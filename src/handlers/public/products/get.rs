// handlers/public/products/get.rs - GET /products/:id handler

use axum::extract::{rejection::PathRejection, Path, State};

use crate::app::AppState;
use crate::database::Product;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn product_get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Product> {
    let Path(id) = id?;

    state
        .db
        .products()
        .find_by_id(id)
        .await?
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found("Product not found"))
}
