pub mod favorites;
pub mod products;
pub mod users;

pub use favorites::FavoriteRepository;
pub use products::ProductRepository;
pub use users::UserRepository;
