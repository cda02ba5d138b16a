use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::app::{dto::CatalogListing, errors, services::AppServices};

pub async fn list_books(Extension(services): Extension<Arc<AppServices>>) -> Json<CatalogListing> {
    Json(CatalogListing(services.catalog()))
}

pub async fn book_by_isbn(
    Extension(services): Extension<Arc<AppServices>>,
    Path(isbn): Path<String>,
) -> Response {
    found_or_empty(services.book(&isbn))
}

pub async fn book_by_author(
    Extension(services): Extension<Arc<AppServices>>,
    Path(author): Path<String>,
) -> Response {
    found_or_empty(services.first_by_author(&author))
}

pub async fn book_by_title(
    Extension(services): Extension<Arc<AppServices>>,
    Path(title): Path<String>,
) -> Response {
    found_or_empty(services.first_by_title(&title))
}

pub async fn reviews_by_isbn(
    Extension(services): Extension<Arc<AppServices>>,
    Path(isbn): Path<String>,
) -> Response {
    found_or_empty(services.book(&isbn).map(|book| book.reviews().clone()))
}

fn found_or_empty<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => (StatusCode::OK, Json(value)).into_response(),
        None => errors::empty_not_found(),
    }
}
