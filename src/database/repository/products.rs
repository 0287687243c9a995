use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewProduct, Product};
use crate::database::query_builder::QueryBuilder;
use crate::filter::{Filter, ProductFilter};

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// One page of matching products plus the total match count.
    pub async fn list(&self, params: &ProductFilter) -> Result<(Vec<Product>, i64), DatabaseError> {
        let filter = Filter::for_products(params).map_err(|e| DatabaseError::QueryError(e.to_string()))?;
        let builder = QueryBuilder::<Product>::new(filter);

        let total = builder.count(&self.pool).await?;
        let products = builder.select_all(&self.pool).await?;
        Ok((products, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, title, price, category, image FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product, DatabaseError> {
        if product.price.is_nan() || product.price < 0.0 {
            return Err(DatabaseError::QueryError(format!(
                "Price must be non-negative, got {}",
                product.price
            )));
        }

        let result = sqlx::query(
            "INSERT INTO products (title, price, category, image) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.image)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            title: product.title.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
        })
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
