use std::env;

use css_common::{parse_boolean_flag, Secret};
use log::*;
use rand::{distributions::Alphanumeric, thread_rng, Rng};

use crate::errors::ServerError;

const DEFAULT_CSS_HOST: &str = "127.0.0.1";
const DEFAULT_CSS_PORT: u16 = 5000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Connection string for the document store, including any credentials.
    pub database_url: String,
    /// Origins allowed to make credentialed cross-site requests (the booking frontend).
    pub allowed_origins: Vec<String>,
    /// If true, the startup reachability ping against the data store is skipped.
    pub skip_preflight: bool,
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_CSS_HOST.to_string(),
            port: DEFAULT_CSS_PORT,
            database_url: String::default(),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            skip_preflight: false,
            auth: AuthConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("CSS_HOST").ok().unwrap_or_else(|| DEFAULT_CSS_HOST.into());
        let port = env::var("CSS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for CSS_PORT. {e} Using the default, {DEFAULT_CSS_PORT}, instead."
                    );
                    DEFAULT_CSS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_CSS_PORT);
        let database_url = env::var("CSS_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ CSS_DATABASE_URL is not set. Please set it to the connection string for the document store.");
            String::default()
        });
        let auth = AuthConfig::try_from_env().unwrap_or_else(|e| {
            warn!(
                "🪛️ Could not load the authentication configuration from environment variables. {e}. Reverting to the \
                 default configuration."
            );
            AuthConfig::default()
        });
        let allowed_origins = parse_allowed_origins(env::var("CSS_ALLOWED_ORIGINS").ok());
        let skip_preflight = parse_boolean_flag(env::var("CSS_SKIP_PREFLIGHT").ok(), false);
        Self { host, port, database_url, allowed_origins, skip_preflight, auth }
    }
}

/// Parse the comma-separated origin allowlist. Entries must be `http(s)://` origins; anything else is dropped with a
/// warning. An empty or missing list falls back to the local dev frontend.
pub fn parse_allowed_origins(value: Option<String>) -> Vec<String> {
    let origins: Vec<String> = value
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let ok = s.starts_with("http://") || s.starts_with("https://");
            if !ok {
                warn!("🪛️ Ignoring invalid origin in CSS_ALLOWED_ORIGINS: {s}");
            }
            ok
        })
        .map(|s| s.to_string())
        .collect();
    if origins.is_empty() {
        vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
    } else {
        origins
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// The shared secret used to sign and verify session tokens.
    pub jwt_secret: Secret<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        warn!(
            "🪛️ No JWT secret was configured, so a random one has been generated. Tokens issued by this process will \
             not survive a restart. Set CSS_JWT_SECRET to make sessions stable."
        );
        let secret: String = thread_rng().sample_iter(&Alphanumeric).take(64).map(char::from).collect();
        Self { jwt_secret: Secret::new(secret) }
    }
}

impl AuthConfig {
    pub fn try_from_env() -> Result<Self, ServerError> {
        let secret = env::var("CSS_JWT_SECRET")
            .map_err(|_| ServerError::ConfigurationError("CSS_JWT_SECRET is not set".to_string()))?;
        if secret.trim().is_empty() {
            return Err(ServerError::ConfigurationError("CSS_JWT_SECRET is empty".to_string()));
        }
        Ok(Self { jwt_secret: Secret::new(secret) })
    }
}
