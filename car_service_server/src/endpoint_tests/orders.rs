use actix_web::{http::StatusCode, web, web::ServiceConfig};
use car_service_engine::{
    db_types::{DeleteOrderResult, InsertOrderResult, Order},
    OrdersApi,
};
use chrono::{Duration, Utc};
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::json;

use super::{
    helpers::{delete_request, get_request, issue_token, post_request, session_cookie},
    mocks::MockOrderManager,
};
use crate::{
    auth::build_auth_cookie,
    routes::{DeleteOrderRoute, MyOrdersRoute, NewOrderRoute},
};

#[actix_web::test]
async fn fetch_orders_without_cookie() {
    let _ = env_logger::try_init().ok();
    let err = get_request(None, "/orders", configure).await.expect_err("Expected error");
    assert_eq!(err, "Authentication Error. No session token was provided.");
}

#[actix_web::test]
async fn fetch_orders_with_tampered_cookie() {
    let _ = env_logger::try_init().ok();
    let mut token = issue_token("a@x.com", Utc::now());
    token.replace_range(token.len() - 10..token.len() - 5, "00000");
    debug!("Calling /orders with tampered token {token}");
    let err = get_request(Some(build_auth_cookie(token)), "/orders", configure).await.expect_err("Expected error");
    assert!(err.starts_with("Authentication Error. Session token is invalid or expired."), "was: {err}");
}

// The signature expires an hour after issuance, independently of the cookie's own 3-minute max-age.
#[actix_web::test]
async fn fetch_orders_with_expired_token() {
    let _ = env_logger::try_init().ok();
    let token = issue_token("a@x.com", Utc::now() - Duration::hours(2));
    let err = get_request(Some(build_auth_cookie(token)), "/orders", configure).await.expect_err("Expected error");
    assert!(err.starts_with("Authentication Error. Session token is invalid or expired."), "was: {err}");
}

#[actix_web::test]
async fn fetch_own_orders() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(Some(session_cookie("a@x.com")), "/orders?email=a%40x.com", configure)
        .await
        .expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_string(&alices_orders()).unwrap());
}

#[actix_web::test]
async fn fetch_another_customers_orders_is_forbidden() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        get_request(Some(session_cookie("a@x.com")), "/orders?email=b%40x.com", configure_store_untouched)
            .await
            .expect("Request failed");
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("Cannot access orders belonging to b@x.com"), "was: {body}");
}

// No owner-key parameter means an unfiltered listing, regardless of who asks. Documented storefront behavior.
#[actix_web::test]
async fn fetch_all_orders_without_owner_filter() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        get_request(Some(session_cookie("a@x.com")), "/orders", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_string(&all_orders()).unwrap());
}

#[actix_web::test]
async fn book_an_order() {
    let _ = env_logger::try_init().ok();
    let payload = json!({
        "customer_email": "a@x.com",
        "service_name": "Full Engine Repair",
        "date": "2024-06-01"
    });
    let (status, body) = post_request("/orders", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"acknowledged":true,"insertedId":"65f1c1a2b3c4d5e6f7a8b9aa"}"#);
}

#[actix_web::test]
async fn delete_an_order() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        delete_request("/orders/65f1c1a2b3c4d5e6f7a8b901", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"acknowledged":true,"deletedCount":1}"#);
}

#[actix_web::test]
async fn delete_with_malformed_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request("/orders/not-an-id", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Malformed record identifier"), "was: {body}");
}

fn order(id: &str, email: &str, service: &str) -> Order {
    Order {
        id: ObjectId::parse_str(id).unwrap(),
        customer_email: email.to_string(),
        details: doc! { "service_name": service },
    }
}

fn alices_orders() -> Vec<Order> {
    vec![
        order("65f1c1a2b3c4d5e6f7a8b901", "a@x.com", "Full Engine Repair"),
        order("65f1c1a2b3c4d5e6f7a8b902", "a@x.com", "Tyre Replacement"),
    ]
}

fn all_orders() -> Vec<Order> {
    let mut orders = alices_orders();
    orders.push(order("65f1c1a2b3c4d5e6f7a8b903", "b@x.com", "Oil Change"));
    orders
}

fn configure(cfg: &mut ServiceConfig) {
    let mut orders = MockOrderManager::new();
    orders.expect_search_orders().returning(|query| {
        let all = all_orders();
        Ok(match query.customer_email {
            Some(email) => all.into_iter().filter(|o| o.customer_email == email).collect(),
            None => all,
        })
    });
    orders.expect_insert_order().withf(|order| order.customer_email == "a@x.com").returning(|_| {
        Ok(InsertOrderResult { acknowledged: true, inserted_id: "65f1c1a2b3c4d5e6f7a8b9aa".to_string() })
    });
    orders
        .expect_delete_order()
        .withf(|id| id == &ObjectId::parse_str("65f1c1a2b3c4d5e6f7a8b901").unwrap())
        .returning(|_| Ok(DeleteOrderResult { acknowledged: true, deleted_count: 1 }));
    register(cfg, orders);
}

// The owner-mismatch rejection must happen before the store is consulted, so this configuration refuses all calls.
fn configure_store_untouched(cfg: &mut ServiceConfig) {
    let mut orders = MockOrderManager::new();
    orders.expect_search_orders().never();
    register(cfg, orders);
}

fn register(cfg: &mut ServiceConfig, orders: MockOrderManager) {
    let orders_api = OrdersApi::new(orders);
    cfg.service(MyOrdersRoute::<MockOrderManager>::new())
        .service(NewOrderRoute::<MockOrderManager>::new())
        .service(DeleteOrderRoute::<MockOrderManager>::new())
        .app_data(web::Data::new(orders_api));
}
