pub mod init;
pub mod products;
pub mod seed;
pub mod user;
