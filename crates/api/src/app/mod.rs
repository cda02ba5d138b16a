//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: stores, token issuing and the operations behind each route
//! - `routes/`: HTTP handlers (one file per area)
//! - `dto.rs`: request/response DTOs and body parsing helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use bookstore_auth::Hs256Jwt;
use bookstore_catalog::seed_catalog;
use bookstore_infra::{InMemoryBookStore, InMemoryUserStore, load_catalog};

use crate::config::ApiConfig;
use crate::middleware::AuthState;
use crate::session::session_layer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with in-memory stores (entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let books = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => seed_catalog(),
    };

    let jwt = Arc::new(Hs256Jwt::new(config.jwt_secret.as_bytes(), config.token_ttl));
    let services = Arc::new(services::AppServices::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryBookStore::with_books(books)),
        jwt.clone(),
    ));

    Ok(router(config, services, AuthState { jwt }))
}

/// Assemble routes around already-built services.
pub fn router(config: &ApiConfig, services: Arc<services::AppServices>, auth_state: AuthState) -> Router {
    // Sessions only exist under /customer.
    let customer = routes::customer_router(auth_state).layer(session_layer(config));

    Router::new()
        .merge(routes::public_router())
        .nest("/customer", customer)
        .fallback(routes::system::not_found)
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
