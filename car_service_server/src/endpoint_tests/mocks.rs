use car_service_engine::{
    db_types::{DeleteOrderResult, InsertOrderResult, NewOrder, Order, ServiceListing},
    order_objects::OrderQueryFilter,
    traits::{CatalogApiError, OrderApiError, OrderManagement, ServiceCatalog},
};
use mockall::mock;
use mongodb::bson::oid::ObjectId;

mock! {
    pub Catalog {}
    impl ServiceCatalog for Catalog {
        async fn fetch_services(&self) -> Result<Vec<ServiceListing>, CatalogApiError>;
        async fn fetch_service_by_id(&self, id: ObjectId) -> Result<Option<ServiceListing>, CatalogApiError>;
    }
}

mock! {
    pub OrderManager {}
    impl OrderManagement for OrderManager {
        async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderApiError>;
        async fn insert_order(&self, order: NewOrder) -> Result<InsertOrderResult, OrderApiError>;
        async fn delete_order(&self, id: ObjectId) -> Result<DeleteOrderResult, OrderApiError>;
    }
}
