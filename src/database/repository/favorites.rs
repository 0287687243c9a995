use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Favorite, FavoriteProduct};

pub struct FavoriteRepository {
    pool: SqlitePool,
}

impl FavoriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the (user, product) favorite, or overwrite its notes if it
    /// already exists. Unknown products are rejected before anything is written.
    pub async fn upsert(
        &self,
        user_id: i64,
        product_id: i64,
        notes: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM products WHERE id = ?1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(DatabaseError::MissingReference("Product not found".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO favorites (user_id, product_id, notes)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (user_id, product_id) DO UPDATE SET notes = excluded.notes
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(notes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if DatabaseError::is_foreign_key_violation(&e) {
                DatabaseError::MissingReference(format!(
                    "User {} or product {} not found",
                    user_id, product_id
                ))
            } else {
                DatabaseError::Sqlx(e)
            }
        })?;

        Ok(())
    }

    /// The user's favorited products, most recently favorited first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<FavoriteProduct>, DatabaseError> {
        let rows = sqlx::query_as::<_, FavoriteProduct>(
            r#"
            SELECT p.id, p.title, p.price, p.category, p.image, f.notes
            FROM favorites f
            JOIN products p ON f.product_id = p.id
            WHERE f.user_id = ?1
            ORDER BY f.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(&self, user_id: i64, product_id: i64) -> Result<Option<Favorite>, DatabaseError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, product_id, notes FROM favorites WHERE user_id = ?1 AND product_id = ?2",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(favorite)
    }

    pub async fn remove(&self, user_id: i64, product_id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = ?1 AND product_id = ?2")
            .bind(user_id)
            .bind(product_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound("Favorite not found".to_string()));
        }
        Ok(())
    }

    pub async fn count_for_user(&self, user_id: i64) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE user_id = ?1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
