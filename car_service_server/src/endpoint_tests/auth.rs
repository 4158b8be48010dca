use actix_web::{cookie::SameSite, http::StatusCode, test, test::TestRequest, web, App};
use log::info;
use serde_json::json;

use super::helpers::get_auth_config;
use crate::{
    auth::{TokenIssuer, ACCESS_TOKEN_VALIDITY_SECS, AUTH_COOKIE_NAME},
    routes::IssueJwtRoute,
};

#[actix_web::test]
async fn issuing_a_token_sets_the_session_cookie() {
    let _ = env_logger::try_init().ok();
    let app = App::new()
        .app_data(web::Data::new(TokenIssuer::new(&get_auth_config())))
        .service(IssueJwtRoute::new());
    let app = test::init_service(app).await;
    let req = TestRequest::post().uri("/jwt").set_json(json!({ "identity": "a@x.com" })).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == AUTH_COOKIE_NAME)
        .expect("No session cookie was set");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::None));
    // Client-side cookie lifetime: 3 minutes. The token inside stays verifiable for an hour.
    assert_eq!(cookie.max_age().map(|d| d.whole_seconds()), Some(180));
    let token = cookie.value().to_string();
    drop(cookie);

    let claims =
        TokenIssuer::new(&get_auth_config()).decode_access_token(&token).expect("Cookie carries an invalid token");
    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_VALIDITY_SECS);

    let body = test::read_body(res).await;
    assert_eq!(body, r#"{"success":true}"#.as_bytes());
}

#[actix_web::test]
async fn issuing_a_token_without_an_identity() {
    let _ = env_logger::try_init().ok();
    let app = App::new()
        .app_data(web::Data::new(TokenIssuer::new(&get_auth_config())))
        .service(IssueJwtRoute::new());
    let app = test::init_service(app).await;
    let req = TestRequest::post().uri("/jwt").set_json(json!({ "not_identity": "a@x.com" })).to_request();
    let err = test::try_call_service(&app, req).await.expect_err("Expected a deserialization error");
    info!("Response error: {err}");
    assert!(err.to_string().contains("identity"), "was: {err}");
}
