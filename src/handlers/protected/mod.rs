// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every handler here takes an `AuthUser`, which the request gate inserts.
pub mod favorites;
