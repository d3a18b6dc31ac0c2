//! In-memory post repository for the `memory` storage provider

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use postboard_common::RepositoryError;
use uuid::Uuid;

use super::PostRepository;
use crate::domain::entities::Post;

#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn posts(&self) -> MutexGuard<'_, HashMap<Uuid, Post>> {
        self.posts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.posts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts().is_empty()
    }
}

#[async_trait::async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let mut posts: Vec<Post> = self.posts().values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts().get(&id).cloned())
    }

    async fn create(&self, post: &Post) -> Result<Post, RepositoryError> {
        let mut posts = self.posts();
        if posts.contains_key(&post.id) {
            return Err(RepositoryError::AlreadyExists);
        }
        posts.insert(post.id, post.clone());
        Ok(post.clone())
    }

    async fn save(&self, post: &Post) -> Result<Post, RepositoryError> {
        let mut posts = self.posts();
        let stored = posts.get_mut(&post.id).ok_or(RepositoryError::NotFound)?;

        if stored.version != post.version {
            return Err(RepositoryError::StaleVersion);
        }

        stored.likes = post.likes.clone();
        stored.comments = post.comments.clone();
        stored.version += 1;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.posts().remove(&id).is_some())
    }
}
