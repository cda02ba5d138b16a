use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{any, get, post, put},
};

use crate::middleware::{AuthState, auth_middleware};

pub mod books;
pub mod reviews;
pub mod system;
pub mod users;

/// Unauthenticated endpoints: ping, registration, users and catalog reads.
pub fn public_router() -> Router {
    Router::new()
        .route("/ping", any(system::ping))
        .route("/register", post(users::register))
        .route("/users", get(users::list_users))
        .route("/", get(books::list_books))
        .route("/isbn/:isbn", get(books::book_by_isbn))
        .route("/author/:author", get(books::book_by_author))
        .route("/title/:title", get(books::book_by_title))
        .route("/review/:isbn", get(books::reviews_by_isbn))
}

/// Endpoints under `/customer`: login plus the token-gated `/auth` area.
///
/// Expects a session layer to be applied by the caller.
pub fn customer_router(auth_state: AuthState) -> Router {
    let protected = Router::new()
        .route(
            "/auth/review/:isbn",
            put(reviews::put_review).delete(reviews::delete_review),
        )
        // Unknown auth paths still require a login before they 404.
        .route("/auth", any(system::not_found))
        .route("/auth/*rest", any(system::not_found))
        .route_layer(from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/login", post(users::login))
        .merge(protected)
}
