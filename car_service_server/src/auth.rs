//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a single process-wide secret. The identity claim is the customer's email
//! address; it doubles as the ownership key for order listings. There is no server-side session storage and no
//! revocation: a token dies when its signature expires, and the cookie that carries it dies on its own (shorter)
//! schedule.

use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    dev::Payload,
    error::ErrorInternalServerError,
    Error as ActixWebError,
    FromRequest,
    HttpMessage,
    HttpRequest,
};
use chrono::{DateTime, Utc};
use futures::future::{ready, Ready};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{config::AuthConfig, errors::AuthError};

/// Name of the cookie that carries the session token.
pub const AUTH_COOKIE_NAME: &str = "token";
/// Client-side lifetime of the session cookie.
///
/// NB: the cookie expires after 3 minutes while the token signature stays valid for a full hour
/// ([`ACCESS_TOKEN_VALIDITY_SECS`]). The two constants are intentionally kept separate and must not be unified: a
/// token replayed from outside the cookie store remains verifiable until its signature expires.
pub const AUTH_COOKIE_MAX_AGE: CookieDuration = CookieDuration::minutes(3);
/// Signature lifetime of an access token, in seconds.
pub const ACCESS_TOKEN_VALIDITY_SECS: i64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// The identity claim: the customer's email address.
    pub sub: String,
    /// Issuance time, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Extract the decoded claims that the session middleware stored in the request extensions.
///
/// Only routes wrapped in [`crate::middleware::SessionMiddlewareFactory`] can use this extractor; anywhere else it
/// fails with a 500, since a missing claim on a protected route means the route table is wired up wrongly.
impl FromRequest for JwtClaims {
    type Error = ActixWebError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<JwtClaims>().cloned().ok_or_else(|| {
            log::warn!("No session claims found in request extensions");
            ErrorInternalServerError("No session claims found in request extensions")
        });
        ready(claims)
    }
}

/// Signs and verifies access tokens with the process-wide shared secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.reveal().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issue a new access token for the given identity claim, valid for one hour from `now`.
    ///
    /// This method DOES NOT authenticate the identity in any way. The login-equivalent request is trusted as-is;
    /// whoever presents an email gets a token for that email.
    pub fn issue_token(&self, identity: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let iat = now.timestamp();
        let claims = JwtClaims { sub: identity.to_string(), iat, exp: iat + ACCESS_TOKEN_VALIDITY_SECS };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningError(e.to_string()))?;
        debug!("💻️ Issued access token for {identity}");
        Ok(token)
    }

    /// Validate the signature and expiry of an access token and return its claims.
    ///
    /// Malformed, tampered and expired tokens all collapse into the single [`AuthError::ValidationError`] failure;
    /// callers have no reason to distinguish them.
    pub fn decode_access_token(&self, token: &str) -> Result<JwtClaims, AuthError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::ValidationError(e.to_string()))
    }
}

/// Build the session cookie that transports an access token to the client.
pub fn build_auth_cookie(token: String) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE_NAME, token)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(AUTH_COOKIE_MAX_AGE)
        .finish()
}

/// The access policy for owner-scoped queries: a caller may only request records keyed to their own identity claim.
pub fn authorize_owner(claims: &JwtClaims, owner_key: &str) -> Result<(), AuthError> {
    if claims.sub == owner_key {
        Ok(())
    } else {
        debug!("💻️ Denying {} access to records owned by {owner_key}", claims.sub);
        Err(AuthError::ForbiddenOwner(owner_key.to_string()))
    }
}
