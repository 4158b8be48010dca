//! Session middleware for the car service server.
//! This middleware can be placed on any route or service.
//!
//! It reads the session cookie from the incoming request and verifies the token it carries. If the token is valid,
//! the decoded claims are attached to the request extensions (where the [`crate::auth::JwtClaims`] extractor finds
//! them) and the request proceeds. A missing cookie or a failed verification short-circuits with a 401 before the
//! handler is ever invoked.

use std::{pin::Pin, rc::Rc};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    web,
    Error,
    HttpMessage,
};
use futures::{
    future::{ok, Ready},
    Future,
};

use crate::{
    auth::{TokenIssuer, AUTH_COOKIE_NAME},
    errors::{AuthError, ServerError},
};

pub struct SessionMiddlewareFactory;

impl SessionMiddlewareFactory {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        SessionMiddlewareFactory
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionMiddlewareService { service: Rc::new(service) })
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let issuer = req.app_data::<web::Data<TokenIssuer>>().cloned().ok_or_else(|| {
                log::warn!("No token issuer found in app data");
                ErrorInternalServerError("No token issuer found in app data")
            })?;
            let cookie = req.cookie(AUTH_COOKIE_NAME).ok_or_else(|| {
                log::debug!("💻️ Rejecting request: no session cookie was presented");
                Error::from(ServerError::from(AuthError::MissingToken))
            })?;
            let claims = issuer.decode_access_token(cookie.value()).map_err(|e| {
                log::debug!("💻️ Rejecting request: {e}");
                Error::from(ServerError::from(e))
            })?;
            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}
