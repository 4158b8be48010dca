use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};

use super::MongoDatabase;
use crate::{
    db_types::{DeleteOrderResult, InsertOrderResult, NewOrder, Order},
    order_objects::OrderQueryFilter,
    traits::{OrderApiError, OrderManagement},
};

impl OrderManagement for MongoDatabase {
    async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderApiError> {
        let filter = query.to_document();
        let cursor = self.orders().find(filter).await?;
        let orders: Vec<Order> = cursor.try_collect().await?;
        debug!("🗃️ Order search returned {} records", orders.len());
        Ok(orders)
    }

    async fn insert_order(&self, order: NewOrder) -> Result<InsertOrderResult, OrderApiError> {
        let result = self.orders().clone_with_type::<NewOrder>().insert_one(order).await?;
        let ack = InsertOrderResult::from(result);
        debug!("🗃️ Order {} has been saved in the store", ack.inserted_id);
        Ok(ack)
    }

    async fn delete_order(&self, id: ObjectId) -> Result<DeleteOrderResult, OrderApiError> {
        let result = self.orders().delete_one(doc! { "_id": id }).await?;
        debug!("🗃️ Delete for order {id} removed {} record(s)", result.deleted_count);
        Ok(DeleteOrderResult::from(result))
    }
}
