use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path, Query},
};

use crate::app::{
    dto::{self, ActorRequest},
    errors::ApiError,
    services::AppServices,
};
use crate::context::PrincipalContext;

/// Create or update the caller's review: `PUT /customer/auth/review/:isbn?review=..`.
pub async fn put_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(isbn): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let actor: ActorRequest = dto::parse_json_body(&body)?;
    dto::ensure_actor(&principal, &actor)?;

    let outcome = services.upsert_review(&isbn, principal.username(), dto::review_text(&query))?;
    Ok(Json(dto::message(outcome.message())))
}

/// Delete the caller's review; the body is the removed text.
pub async fn delete_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(isbn): Path<String>,
    body: Bytes,
) -> Result<String, ApiError> {
    let actor: ActorRequest = dto::parse_json_body(&body)?;
    dto::ensure_actor(&principal, &actor)?;

    services.delete_review(&isbn, principal.username())
}
