//! Unified API for reading the service catalogue.

use std::fmt::Debug;

use mongodb::bson::oid::ObjectId;

use crate::{
    db_types::ServiceListing,
    traits::{CatalogApiError, ServiceCatalog},
};

/// The `ServicesApi` provides a unified API for reading the service catalogue.
///
/// String ids coming off the wire are parsed here, so a malformed id fails with [`CatalogApiError::InvalidId`]
/// before the backend is ever consulted.
pub struct ServicesApi<B> {
    db: B,
}

impl<B: Debug> Debug for ServicesApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServicesApi ({:?})", self.db)
    }
}

impl<B> ServicesApi<B>
where B: ServiceCatalog
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Fetches the full catalogue.
    pub async fn fetch_services(&self) -> Result<Vec<ServiceListing>, CatalogApiError> {
        self.db.fetch_services().await
    }

    /// Fetches the listing with the given id, or `None` if no listing matches a well-formed id.
    pub async fn service_by_id(&self, id: &str) -> Result<Option<ServiceListing>, CatalogApiError> {
        let oid = ObjectId::parse_str(id)?;
        self.db.fetch_service_by_id(oid).await
    }

    /// As [`ServicesApi::service_by_id`], but a missing listing is a hard [`CatalogApiError::NotFound`] instead of
    /// `None`. The HTTP surface keeps the `null` contract; this exists for callers that need the distinction.
    pub async fn require_service(&self, id: &str) -> Result<ServiceListing, CatalogApiError> {
        self.service_by_id(id).await?.ok_or(CatalogApiError::NotFound)
    }
}
