// handlers/protected/favorites/mod.rs - Per-user favorites
pub mod add;
pub mod list;
pub mod remove;

pub use add::favorites_post;
pub use list::favorites_get;
pub use remove::favorite_delete;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
