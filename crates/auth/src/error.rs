//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidUserId,
    UserNotFound,
    UserLoadError,
    TokenIssueFailed,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts().2)
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AuthError::MissingAuthorization => (
                StatusCode::UNAUTHORIZED,
                "MISSING_AUTHORIZATION",
                "Authorization header required",
            ),
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid or expired token",
            ),
            AuthError::InvalidUserId => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid user ID in token",
            ),
            AuthError::UserNotFound => {
                (StatusCode::UNAUTHORIZED, "USER_NOT_FOUND", "User not found")
            }
            AuthError::UserLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_LOAD_ERROR",
                "Failed to load user",
            ),
            AuthError::TokenIssueFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ISSUE_ERROR",
                "Failed to issue session token",
            ),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }
}

impl From<AuthError> for postboard_common::Error {
    fn from(err: AuthError) -> Self {
        if err.status_code() == StatusCode::UNAUTHORIZED {
            postboard_common::Error::Authentication(err.to_string())
        } else {
            postboard_common::Error::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
