use tracing::{info, warn};

use crate::auth::hash_password;
use crate::database::manager::{Database, DatabaseError};
use crate::database::models::NewProduct;

pub const SAMPLE_USERNAME: &str = "john";
pub const SAMPLE_PASSWORD: &str = "1234";

/// What a seeding run actually wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub products_added: usize,
    pub user_added: bool,
}

pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Smartphone X", 999.99, "electronics", "https://example.com/smartphone.jpg"),
        NewProduct::new("Laptop Pro", 1499.99, "electronics", "https://example.com/laptop.jpg"),
        NewProduct::new("Wireless Headphones", 199.99, "electronics", "https://example.com/headphones.jpg"),
        NewProduct::new("Smart Watch", 299.99, "electronics", "https://example.com/smartwatch.jpg"),
        NewProduct::new("Cotton T-Shirt", 19.99, "clothing", "https://example.com/tshirt.jpg"),
        NewProduct::new("Jeans", 49.99, "clothing", "https://example.com/jeans.jpg"),
        NewProduct::new("Running Shoes", 89.99, "footwear", "https://example.com/shoes.jpg"),
        NewProduct::new("Backpack", 39.99, "accessories", "https://example.com/backpack.jpg"),
        NewProduct::new("Water Bottle", 14.99, "accessories", "https://example.com/bottle.jpg"),
        NewProduct::new("Fitness Tracker", 79.99, "electronics", "https://example.com/tracker.jpg"),
    ]
}

/// Insert the sample catalog and the sample user. Products are skipped when
/// the table already has rows; an existing sample user is left alone.
pub async fn seed_sample_data(db: &Database) -> Result<SeedReport, DatabaseError> {
    let mut report = SeedReport::default();

    let digest = hash_password(SAMPLE_PASSWORD).map_err(|e| DatabaseError::QueryError(e.to_string()))?;
    match db.users().create(SAMPLE_USERNAME, &digest).await {
        Ok(user) => {
            info!("Seeded user: {} (id {})", user.username, user.id);
            report.user_added = true;
        }
        Err(DatabaseError::Conflict(_)) => warn!("User '{}' already exists, skipping", SAMPLE_USERNAME),
        Err(e) => return Err(e),
    }

    let products = db.products();
    if products.count().await? > 0 {
        warn!("Products table is not empty, skipping product seed");
        return Ok(report);
    }

    for product in sample_products() {
        products.create(&product).await?;
        info!("Seeded product: {}", product.title);
        report.products_added += 1;
    }

    Ok(report)
}
