//! Route definitions for Users domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::users;
use super::middleware::UsersState;

/// Create all Users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new()
        .route("/api/users/test", get(users::test))
        .route("/api/users/register", post(users::register))
        .route("/api/users/login", post(users::login))
        .route("/api/users/current", get(users::current))
}
