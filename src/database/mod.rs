pub mod manager;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod seed;

pub use manager::{Database, DatabaseError};
pub use models::{Favorite, FavoriteProduct, NewProduct, Product, User};
pub use repository::{FavoriteRepository, ProductRepository, UserRepository};
