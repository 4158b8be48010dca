use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};

use super::MongoDatabase;
use crate::{
    db_types::ServiceListing,
    traits::{CatalogApiError, ServiceCatalog},
};

impl ServiceCatalog for MongoDatabase {
    async fn fetch_services(&self) -> Result<Vec<ServiceListing>, CatalogApiError> {
        let cursor = self.services().find(doc! {}).await?;
        let services: Vec<ServiceListing> = cursor.try_collect().await?;
        debug!("🗃️ Fetched {} service listings", services.len());
        Ok(services)
    }

    async fn fetch_service_by_id(&self, id: ObjectId) -> Result<Option<ServiceListing>, CatalogApiError> {
        let listing = self.services().find_one(doc! { "_id": id }).await?;
        debug!("🗃️ Service lookup for {id}: {}", if listing.is_some() { "hit" } else { "miss" });
        Ok(listing)
    }
}
