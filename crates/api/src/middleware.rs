use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tower_sessions::Session;

use bookstore_auth::JwtValidator;

use crate::app::errors::ApiError;
use crate::context::PrincipalContext;
use crate::session::{AUTHORIZATION_KEY, SessionAuthorization};

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Require a session holding a valid, unexpired access token.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization: SessionAuthorization = session
        .get(AUTHORIZATION_KEY)
        .await
        .map_err(ApiError::session)?
        .ok_or(ApiError::NotLoggedIn)?;

    let claims = state
        .jwt
        .validate(&authorization.access_token, Utc::now())
        .map_err(|e| {
            tracing::debug!(username = %authorization.username, error = %e, "access token rejected");
            ApiError::NotAuthenticated
        })?;

    if claims.sub != authorization.username {
        tracing::debug!(
            session_user = %authorization.username,
            token_user = %claims.sub,
            "session and token disagree"
        );
        return Err(ApiError::NotAuthenticated);
    }

    req.extensions_mut().insert(PrincipalContext::new(claims.sub));

    Ok(next.run(req).await)
}
