//! The engine's public-facing API.
//!
//! Each wrapper is generic over the storage trait it consumes, which is what lets the server's endpoint tests run
//! against mock backends.
pub mod orders_api;
pub mod services_api;
