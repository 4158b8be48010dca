//! MongoDB backend for the car-service engine.
//!
//! One [`MongoDatabase`] is created at startup and cloned into each server worker. Clones share the driver's
//! connection pool, so concurrent logical operations over the one handle are safe by construction.
mod db;
mod orders;
mod services;

pub use db::MongoDatabase;
