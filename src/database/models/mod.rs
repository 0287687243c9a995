pub mod favorite;
pub mod product;
pub mod user;

pub use favorite::{Favorite, FavoriteProduct};
pub use product::{NewProduct, Product};
pub use user::User;
