use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

/// Product data before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }
}
