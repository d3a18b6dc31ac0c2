//! Domain entities for the Users domain

use chrono::{DateTime, Utc};
use postboard_auth::AuthIdentity;
use serde::Serialize;
use uuid::Uuid;

/// Stored user record
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from already-normalized email and hashed password
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            avatar,
            created_at: Utc::now(),
        }
    }

    /// Credential-free view used for session tokens and request context
    pub fn identity(&self) -> AuthIdentity {
        AuthIdentity {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Canonical form used for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Public representation of a user (never includes the password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}
