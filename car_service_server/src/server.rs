use std::time::Duration;

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    http::{header, KeepAlive},
    middleware::Logger,
    web,
    App,
    HttpServer,
};
use car_service_engine::{MongoDatabase, OrdersApi, ServicesApi};
use log::{info, warn};

use crate::{
    auth::TokenIssuer,
    config::ServerConfig,
    errors::ServerError,
    routes::{
        health,
        index,
        DeleteOrderRoute,
        IssueJwtRoute,
        MyOrdersRoute,
        NewOrderRoute,
        ServiceByIdRoute,
        ServicesRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = MongoDatabase::new_with_url(&config.database_url)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if config.skip_preflight {
        info!("🚀️ Skipping the data store preflight ping");
    } else {
        match db.ping().await {
            Ok(()) => info!("🚀️ Pinged the deployment. Successfully connected to the data store."),
            // The listener starts regardless. Requests that reach the store will fail until it comes back.
            Err(e) => warn!("🚀️ The data store is not reachable at startup. {e}"),
        }
    }
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: MongoDatabase) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let services_api = ServicesApi::new(db.clone());
        let orders_api = OrdersApi::new(db.clone());
        let jwt_signer = TokenIssuer::new(&config.auth);
        let cors = build_cors(&config.allowed_origins);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("css::access_log"))
            .wrap(cors)
            .app_data(web::Data::new(services_api))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(jwt_signer))
            .service(health)
            .service(index)
            .service(IssueJwtRoute::new())
            .service(ServicesRoute::<MongoDatabase>::new())
            .service(ServiceByIdRoute::<MongoDatabase>::new())
            .service(MyOrdersRoute::<MongoDatabase>::new())
            .service(NewOrderRoute::<MongoDatabase>::new())
            .service(DeleteOrderRoute::<MongoDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}

/// Credentialed CORS for the booking frontend: only the configured origins may send the session cookie cross-site.
fn build_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600);
    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}
