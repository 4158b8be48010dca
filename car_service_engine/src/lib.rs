//! # Car Service Engine
//!
//! The engine is the data layer for the car-service booking server. It is responsible for reading the service
//! catalogue and managing customer orders, and it is store-agnostic at the seams:
//!
//! 1. Storage backends implement the traits in [`mod@traits`]. The only backend shipped today is MongoDB
//!    ([`MongoDatabase`]), which talks to the `car-services` database over a single long-lived, pooled client.
//! 2. Callers go through the thin API wrappers in [`mod@cse_api`] ([`ServicesApi`], [`OrdersApi`]). The wrappers own
//!    string-to-ObjectId parsing, so a malformed identifier is rejected before any I/O happens.
//!
//! The data types stored in the collections are defined in [`mod@db_types`] and are public. Records carry their
//! store-assigned id plus an opaque bag of descriptive fields; the engine never interprets those fields.
mod db;

pub mod db_types;
pub mod order_objects;
pub mod traits;

mod cse_api;

pub use cse_api::{orders_api::OrdersApi, services_api::ServicesApi};
pub use db::mongo::MongoDatabase;
pub use traits::{CatalogApiError, OrderApiError, OrderManagement, ServiceCatalog};
