use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::product::Product;

/// Row of the `favorites` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub notes: Option<String>,
}

/// A favorited product joined with the favorite's notes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoriteProduct {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub product: Product,
    pub notes: Option<String>,
}
