//! Concrete authentication backend
//!
//! Wraps an identity store + `AuthConfig`. The store is a trait so each
//! storage provider can serve identity lookups from its own user records.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::context::{AuthContext, AuthIdentity};
use crate::error::AuthError;

/// Identity lookup used to resolve the subject of a verified token
#[async_trait::async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_identity(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError>;
}

/// PostgreSQL identity store reading the `users` table
#[derive(Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IdentityStore for PgIdentityStore {
    async fn find_identity(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, name, email, avatar
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }
}

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    identities: Arc<dyn IdentityStore>,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(identities: Arc<dyn IdentityStore>, config: AuthConfig) -> Self {
        Self { identities, config }
    }

    /// Sign a session token for the given identity
    pub fn issue_token(&self, identity: &AuthIdentity) -> Result<String, AuthError> {
        crate::jwt::issue_jwt_token(identity, &self.config)
    }

    /// Check signature, expiry and configured issuer/audience
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        crate::jwt::validate_jwt_token(token, &self.config)
    }

    /// Verify a bearer token and resolve it to a stored identity
    pub async fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = self.verify_token(token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = self
            .identities
            .find_identity(user_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(user_id = %user_id, "Token subject no longer exists");
                AuthError::UserNotFound
            })?;

        Ok(AuthContext::new(user))
    }
}
