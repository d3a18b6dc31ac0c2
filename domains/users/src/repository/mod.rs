//! Repository implementations for the Users domain

pub mod memory;
pub mod users;

use postboard_common::RepositoryError;

use crate::domain::entities::User;

pub use memory::InMemoryUserRepository;
pub use users::PgUserRepository;

/// Storage accessors for the `users` collection
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a new user; `AlreadyExists` when the email is taken
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
}
