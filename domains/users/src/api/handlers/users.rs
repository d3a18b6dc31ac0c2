//! User account API handlers
//!
//! Implements:
//! - POST /api/users/register - Register a new user
//! - POST /api/users/login - Exchange credentials for a session token
//! - GET /api/users/current - Return the authenticated user

use axum::{extract::State, http::StatusCode, Json};
use postboard_auth::{AuthUser, BEARER_PREFIX};
use postboard_common::{Error, FieldErrors, RepositoryError, Result, ValidatedJson};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::middleware::UsersState;
use crate::domain::entities::{normalize_email, User, UserResponse};
use crate::domain::gravatar::gravatar_url;
use crate::domain::password::{hash_password, verify_password};
use crate::domain::validation::{LoginRequest, RegisterRequest};

const EMAIL_EXISTS: &str = "Email already exists";

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    /// `"Bearer <jwt>"`, ready to use as an Authorization header value
    pub token: String,
}

/// Response for the current user
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// GET /api/users/test
pub async fn test() -> Json<Value> {
    Json(json!({ "msg": "Users works" }))
}

/// POST /api/users/register - Register a new user
pub async fn register(
    State(state): State<UsersState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let email = normalize_email(&req.email);

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(Error::InvalidFields(FieldErrors::single("email", EMAIL_EXISTS)));
    }

    let avatar = gravatar_url(&email);
    let password_hash = hash_password(req.password, state.bcrypt_cost).await?;
    let user = User::new(req.name, email, password_hash, avatar);

    // A concurrent registration can still win the race to the unique index
    let created = state.users.create(&user).await.map_err(|e| match e {
        RepositoryError::AlreadyExists => {
            Error::InvalidFields(FieldErrors::single("email", EMAIL_EXISTS))
        }
        other => Error::from(other),
    })?;

    tracing::info!(user_id = %created.id, "New user registered");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// POST /api/users/login - Exchange credentials for a session token
pub async fn login(
    State(state): State<UsersState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = normalize_email(&req.email);

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| Error::InvalidFields(FieldErrors::single("email", "User not found")))?;

    if !verify_password(req.password, user.password_hash.clone()).await? {
        tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
        return Err(Error::InvalidFields(FieldErrors::single(
            "password",
            "Password incorrect",
        )));
    }

    let token = state.auth.issue_token(&user.identity())?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        token: format!("{}{}", BEARER_PREFIX, token),
    }))
}

/// GET /api/users/current - Return the authenticated user
pub async fn current(AuthUser(ctx): AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        id: ctx.user.id,
        name: ctx.user.name,
        email: ctx.user.email,
    })
}
