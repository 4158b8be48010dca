use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::db_types::ServiceListing;

#[derive(Debug, Clone, Error)]
pub enum CatalogApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Malformed record identifier: {0}")]
    InvalidId(String),
    /// Internal-only: the HTTP surface reports a missing listing as a `null` body, never as this error. It exists so
    /// callers that *do* need a hard distinction (tests, back-office tooling) have one.
    #[error("No service listing matches the given id")]
    NotFound,
}

impl From<mongodb::error::Error> for CatalogApiError {
    fn from(e: mongodb::error::Error) -> Self {
        CatalogApiError::DatabaseError(e.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for CatalogApiError {
    fn from(e: mongodb::bson::oid::Error) -> Self {
        CatalogApiError::InvalidId(e.to_string())
    }
}

/// The `ServiceCatalog` trait defines read access to the service catalogue.
///
/// The catalogue is populated by an out-of-band data-loading process, so there are no insert or update methods here
/// on purpose.
#[allow(async_fn_in_trait)]
pub trait ServiceCatalog {
    /// Fetches every listing in the catalogue. No pagination; the catalogue is small by construction.
    async fn fetch_services(&self) -> Result<Vec<ServiceListing>, CatalogApiError>;

    /// Fetches the listing with the given id. If no listing matches, `None` is returned.
    async fn fetch_service_by_id(&self, id: ObjectId) -> Result<Option<ServiceListing>, CatalogApiError>;
}
