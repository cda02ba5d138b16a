//! Server-side session state for the customer area.

use serde::{Deserialize, Serialize};
use tower_sessions::cookie::SameSite;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use bookstore_core::Username;

use crate::config::ApiConfig;

pub const SESSION_COOKIE_NAME: &str = "bookstore.sid";

/// Session key holding [`SessionAuthorization`].
pub const AUTHORIZATION_KEY: &str = "authorization";

/// What a successful login leaves in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAuthorization {
    pub access_token: String,
    pub username: Username,
}

/// Cookie-keyed sessions backed by process memory.
pub fn session_layer(config: &ApiConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.secure_cookies)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
}
