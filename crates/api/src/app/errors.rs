use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use bookstore_auth::{LoginError, RegistrationError};
use bookstore_catalog::ReviewError;

/// Every way a request can fail, mapped to a status code in one place.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("User not logged in")]
    NotLoggedIn,

    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("Reviews can only be managed by their author.")]
    ForeignAuthor,

    #[error("Request body must be valid JSON.")]
    InvalidBody,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn session(err: tower_sessions::session::Error) -> Self {
        Self::Internal(format!("session store: {err}"))
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Registration(RegistrationError::MissingFields { .. }) => {
                (StatusCode::NOT_FOUND, "missing_fields")
            }
            ApiError::Registration(RegistrationError::AlreadyExists) => (StatusCode::NOT_FOUND, "user_exists"),
            ApiError::Login(LoginError::MissingCredentials) => (StatusCode::NOT_FOUND, "missing_credentials"),
            ApiError::Login(LoginError::InvalidCredentials) => (StatusCode::UNAUTHORIZED, "invalid_login"),
            ApiError::Review(ReviewError::UnknownIsbn) => (StatusCode::NOT_FOUND, "unknown_isbn"),
            ApiError::Review(ReviewError::MissingText) => (StatusCode::NOT_FOUND, "missing_review"),
            ApiError::Review(ReviewError::NoReview) => (StatusCode::BAD_REQUEST, "no_review"),
            ApiError::NotLoggedIn => (StatusCode::UNAUTHORIZED, "not_logged_in"),
            ApiError::NotAuthenticated => (StatusCode::UNAUTHORIZED, "not_authenticated"),
            ApiError::ForeignAuthor => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::InvalidBody => (StatusCode::BAD_REQUEST, "invalid_body"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();
        if let ApiError::Internal(detail) = &self {
            tracing::error!("request failed: {detail}");
            return json_error(status, code, "internal server error");
        }
        json_error(status, code, self.to_string())
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// `404 {}`: the not-found shape of catalog lookups.
pub fn empty_not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, axum::Json(json!({}))).into_response()
}
