//! In-memory user repository
//!
//! Used by the `memory` storage provider for local development and tests.
//! Also serves identity lookups for the auth backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use postboard_auth::{AuthError, AuthIdentity, IdentityStore};
use postboard_common::RepositoryError;
use uuid::Uuid;

use super::UserRepository;
use crate::domain::entities::User;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> MutexGuard<'_, HashMap<Uuid, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users().is_empty()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users().values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let mut users = self.users();
        if users.contains_key(&user.id) || users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::AlreadyExists);
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}

#[async_trait::async_trait]
impl IdentityStore for InMemoryUserRepository {
    async fn find_identity(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        Ok(self.users().get(&id).map(User::identity))
    }
}
