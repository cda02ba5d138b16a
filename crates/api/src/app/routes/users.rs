use std::sync::Arc;

use axum::{Json, body::Bytes, extract::Extension, http::StatusCode};
use tower_sessions::Session;

use bookstore_auth::User;

use crate::app::{dto, errors::ApiError, services::AppServices};
use crate::session::{AUTHORIZATION_KEY, SessionAuthorization};

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    services.register(dto::credentials_from_body(&body))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<User>> {
    Json(services.users())
}

/// Verify credentials and bind a fresh access token to the session.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    session: Session,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let (username, access_token) = services.login(dto::credentials_from_body(&body))?;

    // New id on privilege change.
    session.cycle_id().await.map_err(ApiError::session)?;
    session
        .insert(
            AUTHORIZATION_KEY,
            SessionAuthorization {
                access_token,
                username,
            },
        )
        .await
        .map_err(ApiError::session)?;

    Ok(StatusCode::NO_CONTENT)
}
