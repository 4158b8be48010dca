use std::fmt::Debug;

use log::debug;
use mongodb::{bson::doc, Client, Collection};

use crate::db_types::{Order, ServiceListing};

pub const DATABASE_NAME: &str = "car-services";
pub const SERVICES_COLLECTION: &str = "services";
pub const ORDERS_COLLECTION: &str = "orders";

/// Handle to the `car-services` database. Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct MongoDatabase {
    client: Client,
    services: Collection<ServiceListing>,
    orders: Collection<Order>,
}

impl Debug for MongoDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MongoDatabase ({DATABASE_NAME})")
    }
}

impl MongoDatabase {
    /// Create a database handle from a connection string.
    ///
    /// The driver connects lazily, so this only fails on a malformed connection string. Use [`MongoDatabase::ping`]
    /// to find out whether the store is actually reachable.
    pub async fn new_with_url(url: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(DATABASE_NAME);
        let services = db.collection::<ServiceListing>(SERVICES_COLLECTION);
        let orders = db.collection::<Order>(ORDERS_COLLECTION);
        debug!("🗃️ Created database handle for {DATABASE_NAME}");
        Ok(Self { client, services, orders })
    }

    /// Round-trip a `ping` command to confirm the deployment is reachable.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.client.database("admin").run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub(crate) fn services(&self) -> &Collection<ServiceListing> {
        &self.services
    }

    pub(crate) fn orders(&self) -> &Collection<Order> {
        &self.orders
    }
}
