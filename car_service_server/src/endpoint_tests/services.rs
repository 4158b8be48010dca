use actix_web::{http::StatusCode, web, web::ServiceConfig};
use car_service_engine::{db_types::ServiceListing, ServicesApi};
use mongodb::bson::{doc, oid::ObjectId};

use super::{helpers::get_request, mocks::MockCatalog};
use crate::routes::{ServiceByIdRoute, ServicesRoute};

#[actix_web::test]
async fn fetch_all_services() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(None, "/services", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_string(&catalogue()).unwrap());
}

#[actix_web::test]
async fn fetch_single_service() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        get_request(None, "/services/65f1c1a2b3c4d5e6f7a8b9c0", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""_id":"65f1c1a2b3c4d5e6f7a8b9c0""#), "was: {body}");
    assert!(body.contains("Full Engine Repair"), "was: {body}");
}

// A well-formed id with no matching record is not an error: the body is a JSON null, and clients treat null as
// not-found.
#[actix_web::test]
async fn fetch_unknown_service_returns_null() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        get_request(None, "/services/65f1c1a2b3c4d5e6f7a8b9ff", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "null");
}

#[actix_web::test]
async fn fetch_service_with_malformed_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(None, "/services/not-an-id", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Malformed record identifier"), "was: {body}");
}

fn listing(id: &str, name: &str, price: &str) -> ServiceListing {
    ServiceListing {
        id: ObjectId::parse_str(id).unwrap(),
        fields: doc! { "name": name, "price": price },
    }
}

fn catalogue() -> Vec<ServiceListing> {
    vec![
        listing("65f1c1a2b3c4d5e6f7a8b9c0", "Full Engine Repair", "$250"),
        listing("65f1c1a2b3c4d5e6f7a8b9c1", "Tyre Replacement", "$40"),
    ]
}

fn configure(cfg: &mut ServiceConfig) {
    let mut catalog = MockCatalog::new();
    catalog.expect_fetch_services().returning(|| Ok(catalogue()));
    catalog.expect_fetch_service_by_id().returning(|id| Ok(catalogue().into_iter().find(|l| l.id == id)));
    let services_api = ServicesApi::new(catalog);
    cfg.service(ServicesRoute::<MockCatalog>::new())
        .service(ServiceByIdRoute::<MockCatalog>::new())
        .app_data(web::Data::new(services_api));
}
