use serde::{Deserialize, Serialize};

/// Body of the login-equivalent `POST /jwt` request. The identity is taken at face value; there is no password or
/// challenge step in this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The identity claim to embed in the session token (the customer's email address).
    pub identity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
}

impl AuthResponse {
    pub fn success() -> Self {
        Self { success: true }
    }
}

/// Query parameters accepted by the owner-scoped order listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderQueryParams {
    /// The owner-key filter. When present it must match the authenticated identity; when absent, the listing is
    /// unfiltered.
    pub email: Option<String>,
}
