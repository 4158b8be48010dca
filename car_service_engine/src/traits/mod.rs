//! Interface contracts for engine storage *backends*.
//!
//! A backend is anything that can serve the two collections the booking site cares about:
//!
//! * [`ServiceCatalog`] exposes the read-only service catalogue.
//! * [`OrderManagement`] stores, queries and deletes customer orders.
//!
//! Backends implement both traits over a single long-lived connection handle that is safe to clone into each server
//! worker. The shipped implementation is [`crate::MongoDatabase`].
mod order_management;
mod service_catalog;

pub use order_management::{OrderApiError, OrderManagement};
pub use service_catalog::{CatalogApiError, ServiceCatalog};
