use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode};

use crate::app::services::AppServices;

pub async fn ping(Extension(services): Extension<Arc<AppServices>>) -> String {
    let seconds = services.uptime().as_secs_f64().round() as u64;
    format!("Current runtime: {seconds} seconds")
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404! Page not found")
}
