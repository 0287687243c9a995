// handlers/public/auth/mod.rs - Public authentication handlers
pub mod login;    // POST /login - authenticate and get JWT
pub mod register; // POST /register - create new account

pub use login::login_post;
pub use register::register_post;

use serde::Deserialize;

/// Body shared by login and registration.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}
