// handlers/public/products/mod.rs - Read-only catalog endpoints
pub mod get;
pub mod list;

pub use get::product_get;
pub use list::products_get;
