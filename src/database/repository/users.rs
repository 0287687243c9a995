use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::User;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user whose password has already been hashed.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?1, ?2)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if DatabaseError::is_unique_violation(&e) {
                    DatabaseError::Conflict(format!("Username '{}' is already taken", username))
                } else {
                    DatabaseError::Sqlx(e)
                }
            })?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            password: password_hash.to_string(),
        })
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use crate::database::{Database, DatabaseError};

    #[tokio::test]
    async fn create_and_find_user() {
        let db = Database::in_memory().await.unwrap();
        let users = db.users();

        let created = users.create("john", "digest").await.unwrap();
        assert!(created.id > 0);

        let by_name = users.find_by_username("john").await.unwrap().expect("user by name");
        assert_eq!(by_name.id, created.id);
        assert_eq!(by_name.password, "digest");

        let by_id = users.find_by_id(created.id).await.unwrap().expect("user by id");
        assert_eq!(by_id.username, "john");

        assert!(users.find_by_username("jane").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() {
        let db = Database::in_memory().await.unwrap();
        let users = db.users();

        users.create("john", "a").await.unwrap();
        let err = users.create("john", "b").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)));
    }
}
