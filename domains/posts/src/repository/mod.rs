//! Repository implementations for the Posts domain

pub mod memory;
pub mod posts;

use postboard_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::Post;

pub use memory::InMemoryPostRepository;
pub use posts::PgPostRepository;

/// Storage accessors for the `posts` collection
#[async_trait::async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first
    async fn list(&self) -> Result<Vec<Post>, RepositoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<Post>, RepositoryError>;

    async fn create(&self, post: &Post) -> Result<Post, RepositoryError>;

    /// Persist embedded-sequence edits.
    ///
    /// Writes only when the stored version equals `post.version`, returning
    /// the post with its version bumped. `StaleVersion` otherwise;
    /// `NotFound` when the post no longer exists.
    async fn save(&self, post: &Post) -> Result<Post, RepositoryError>;

    /// Returns whether a post was removed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
