//! Runtime configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;
const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    /// JSON catalog replacing the built-in seed catalog.
    pub catalog_path: Option<PathBuf>,
    pub secure_cookies: bool,
}

impl core::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("catalog_path", &self.catalog_path)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BOOKSTORE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BOOKSTORE_BIND_ADDR must be a socket address (host:port)")?;

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set; using insecure dev default");
                DEV_JWT_SECRET.to_string()
            }
        };

        let ttl_secs = match lookup("TOKEN_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .context("TOKEN_TTL_SECS must be an integer number of seconds")?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };
        if ttl_secs <= 0 {
            anyhow::bail!("TOKEN_TTL_SECS must be positive (got {ttl_secs})");
        }

        let catalog_path = lookup("BOOKSTORE_CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let secure_cookies = match lookup("SESSION_SECURE_COOKIE") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .context("SESSION_SECURE_COOKIE must be true or false")?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl: Duration::seconds(ttl_secs),
            catalog_path,
            secure_cookies,
        })
    }

    /// Loopback configuration on an ephemeral port with the seed catalog.
    pub fn for_tests(jwt_secret: &str) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            jwt_secret: jwt_secret.to_string(),
            token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
            catalog_path: None,
            secure_cookies: false,
        }
    }
}
