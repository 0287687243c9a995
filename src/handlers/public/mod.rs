// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition, registration and the read-only catalog.
pub mod auth;
pub mod products;
