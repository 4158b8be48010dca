use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    http::StatusCode,
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use chrono::{DateTime, Utc};
use css_common::Secret;
use log::debug;

use crate::{
    auth::{build_auth_cookie, TokenIssuer},
    config::AuthConfig,
};

// Creates a test `AuthConfig` for issuing tokens. DO NOT re-use this secret anywhere.
pub fn get_auth_config() -> AuthConfig {
    AuthConfig { jwt_secret: Secret::new("endpoint-test-secret-0123456789abcdef".to_string()) }
}

pub fn issue_token(identity: &str, issued_at: DateTime<Utc>) -> String {
    TokenIssuer::new(&get_auth_config()).issue_token(identity, issued_at).expect("Failed to sign token")
}

/// A fresh, valid session cookie for the given identity.
pub fn session_cookie(identity: &str) -> Cookie<'static> {
    build_auth_cookie(issue_token(identity, Utc::now()))
}

pub async fn get_request(
    cookie: Option<Cookie<'static>>,
    path: &str,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), String> {
    let mut req = TestRequest::get().uri(path);
    if let Some(cookie) = cookie {
        req = req.cookie(cookie);
    }
    send(req, configure).await
}

pub async fn post_request(
    path: &str,
    body: serde_json::Value,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), String> {
    send(TestRequest::post().uri(path).set_json(body), configure).await
}

pub async fn delete_request(
    path: &str,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), String> {
    send(TestRequest::delete().uri(path), configure).await
}

async fn send(req: TestRequest, configure: fn(&mut ServiceConfig)) -> Result<(StatusCode, String), String> {
    let app = App::new().app_data(web::Data::new(TokenIssuer::new(&get_auth_config()))).configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let (_, res) = test::try_call_service(&service, req.to_request()).await.map_err(|e| e.to_string())?.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    Ok((status, body))
}
