use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::{
    db_types::{DeleteOrderResult, InsertOrderResult, NewOrder, Order},
    order_objects::OrderQueryFilter,
};

#[derive(Debug, Clone, Error)]
pub enum OrderApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Malformed record identifier: {0}")]
    InvalidId(String),
}

impl From<mongodb::error::Error> for OrderApiError {
    fn from(e: mongodb::error::Error) -> Self {
        OrderApiError::DatabaseError(e.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for OrderApiError {
    fn from(e: mongodb::bson::oid::Error) -> Self {
        OrderApiError::InvalidId(e.to_string())
    }
}

/// The `OrderManagement` trait defines behaviour for storing and retrieving customer orders.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Fetches every order matching the given filter. An empty filter returns the whole collection.
    async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderApiError>;

    /// Inserts a new order and returns the store's acknowledgment, including the assigned id.
    async fn insert_order(&self, order: NewOrder) -> Result<InsertOrderResult, OrderApiError>;

    /// Deletes the order with the given id. Deleting a non-existent id is not an error; the acknowledgment carries a
    /// zero deleted-count.
    async fn delete_order(&self, id: ObjectId) -> Result<DeleteOrderResult, OrderApiError>;
}
