//! Authorization context for authenticated users

use serde::Serialize;
use uuid::Uuid;

/// Identity attached to an authenticated request.
///
/// Read-model view of a stored user: everything except credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Check whether the caller is the given user
    pub fn is_user(&self, user_id: Uuid) -> bool {
        self.user.id == user_id
    }
}
