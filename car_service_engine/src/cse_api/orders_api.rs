//! Unified API for managing customer orders.

use std::fmt::Debug;

use log::trace;
use mongodb::bson::oid::ObjectId;

use crate::{
    db_types::{DeleteOrderResult, InsertOrderResult, NewOrder, Order},
    order_objects::OrderQueryFilter,
    traits::{OrderApiError, OrderManagement},
};

/// The `OrdersApi` provides a unified API for storing, querying and deleting customer orders.
pub struct OrdersApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrdersApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrdersApi ({:?})", self.db)
    }
}

impl<B> OrdersApi<B>
where B: OrderManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Fetches all orders matching the filter. An empty filter returns every order in the collection.
    pub async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderApiError> {
        trace!("🗃️ Searching orders with filter {query:?}");
        self.db.search_orders(query).await
    }

    /// Inserts a new order and returns the store's acknowledgment.
    pub async fn insert_order(&self, order: NewOrder) -> Result<InsertOrderResult, OrderApiError> {
        self.db.insert_order(order).await
    }

    /// Deletes the order with the given (string-form) id. Malformed ids fail with [`OrderApiError::InvalidId`]
    /// without touching the store.
    pub async fn delete_order(&self, id: &str) -> Result<DeleteOrderResult, OrderApiError> {
        let oid = ObjectId::parse_str(id)?;
        self.db.delete_order(oid).await
    }
}
