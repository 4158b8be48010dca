//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause
//! the current worker to stop processing new requests. Token signing and verification are CPU-bound and complete in
//! microseconds, so they run inline; everything that touches the data store is awaited so that worker threads can
//! serve other requests while the store responds.

use actix_web::{get, web, HttpResponse, Responder};
use car_service_engine::{
    db_types::NewOrder,
    order_objects::OrderQueryFilter,
    OrderManagement,
    OrdersApi,
    ServiceCatalog,
    ServicesApi,
};
use chrono::Utc;
use log::*;

use crate::{
    auth::{authorize_owner, build_auth_cookie, JwtClaims, TokenIssuer},
    data_objects::{AuthResponse, LoginRequest, OrderQueryParams},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal) => {
        paste::paste! { pub struct [<$name:camel Route>];}
        paste::paste! {
            impl [<$name:camel Route>] {
                #[allow(clippy::new_without_default)]
                pub fn new() -> Self { Self }
            }
        }
        paste::paste! {
            impl actix_web::dev::HttpServiceFactory for [<$name:camel Route>] {
                fn register(self, config: &mut actix_web::dev::AppService) {
                    let res = actix_web::Resource::new($path)
                        .name(stringify!($name))
                        .guard(actix_web::guard::$method())
                        .to($name);
                    actix_web::dev::HttpServiceFactory::register(res, config);
                }
            }
        }
    };

    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };

    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+ where session required)  => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds)++ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>)
                    .wrap($crate::middleware::SessionMiddlewareFactory::new());
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("car service server is available.")
}

//----------------------------------------------   Auth  ----------------------------------------------------
route!(issue_jwt => Post "/jwt");
/// Route handler for the token-issuance endpoint.
///
/// This is the login-equivalent request: the client posts an identity claim (its email address) and receives a
/// signed session token in the `token` cookie. The claim is NOT authenticated here; the endpoint is a
/// single-shared-secret session gate, not a login system.
///
/// The cookie is http-only, secure, cross-site-allowed, and expires client-side after 3 minutes even though the
/// token signature stays valid for an hour.
pub async fn issue_jwt(
    body: web::Json<LoginRequest>,
    signer: web::Data<TokenIssuer>,
) -> Result<HttpResponse, ServerError> {
    let identity = body.into_inner().identity;
    trace!("💻️ Received token issuance request for {identity}");
    let token = signer.issue_token(&identity, Utc::now())?;
    let cookie = build_auth_cookie(token);
    Ok(HttpResponse::Ok().cookie(cookie).json(AuthResponse::success()))
}

//----------------------------------------------   Services  ----------------------------------------------------
route!(services => Get "/services" impl ServiceCatalog);
/// Full catalogue scan. Unauthenticated, unpaginated, unfiltered.
pub async fn services<B: ServiceCatalog>(api: web::Data<ServicesApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET all service listings");
    let services = api.fetch_services().await?;
    Ok(HttpResponse::Ok().json(services))
}

route!(service_by_id => Get "/services/{id}" impl ServiceCatalog);
/// Single-listing lookup. A well-formed id with no matching record responds `200` with a JSON `null` body; clients
/// treat null as not-found. Malformed ids fail with a 400.
pub async fn service_by_id<B: ServiceCatalog>(
    path: web::Path<String>,
    api: web::Data<ServicesApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ GET service listing {id}");
    let listing = api.service_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(listing))
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(new_order => Post "/orders" impl OrderManagement);
/// Book a new order. Unauthenticated by contract with the storefront client; the payload's `customer_email` is
/// recorded as the owner key without being checked against any session.
pub async fn new_order<B: OrderManagement>(
    body: web::Json<NewOrder>,
    api: web::Data<OrdersApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let order = body.into_inner();
    debug!("💻️ POST new order for {}", order.customer_email);
    let ack = api.insert_order(order).await?;
    Ok(HttpResponse::Ok().json(ack))
}

route!(my_orders => Get "/orders" impl OrderManagement where session required);
/// Owner-scoped order listing. Requires a valid session cookie.
///
/// When an `email` query parameter is present it must equal the authenticated identity claim, otherwise the request
/// is denied with a 403 before the store is consulted. When the parameter is absent the listing is unfiltered and
/// returns every order in the collection; that permissive fallback is part of the storefront contract.
pub async fn my_orders<B: OrderManagement>(
    claims: JwtClaims,
    query: web::Query<OrderQueryParams>,
    api: web::Data<OrdersApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET orders for {}", claims.sub);
    let params = query.into_inner();
    let mut filter = OrderQueryFilter::default();
    if let Some(email) = params.email {
        authorize_owner(&claims, &email)?;
        filter = filter.with_customer_email(email);
    }
    let orders = api.search_orders(filter).await?;
    Ok(HttpResponse::Ok().json(orders))
}

route!(delete_order => Delete "/orders/{id}" impl OrderManagement);
/// Remove an order by id. Neither a session nor ownership of the order is required; like order creation, deletion is
/// unauthenticated by contract with the storefront client. Deleting an unknown id acknowledges with a zero
/// deleted-count.
pub async fn delete_order<B: OrderManagement>(
    path: web::Path<String>,
    api: web::Data<OrdersApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ DELETE order {id}");
    let ack = api.delete_order(&id).await?;
    Ok(HttpResponse::Ok().json(ack))
}
