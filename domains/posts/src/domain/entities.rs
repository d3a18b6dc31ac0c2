//! Domain entities for the Posts domain
//!
//! A post owns two embedded sequences, likes and comments. Both keep the
//! most recent entry first; removal splices out the first match and leaves
//! the remaining entries in order.

use chrono::{DateTime, Utc};
use postboard_common::Error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user's like on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub user: Uuid,
}

/// A comment embedded in a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

/// Violations of the like/comment sequence rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PostRuleError {
    #[error("User already liked this post")]
    AlreadyLiked,

    #[error("You have not yet liked this post")]
    NotLiked,

    #[error("Comment does not exist")]
    CommentNotFound,
}

impl From<PostRuleError> for Error {
    fn from(err: PostRuleError) -> Self {
        match err {
            PostRuleError::AlreadyLiked | PostRuleError::NotLiked => {
                Error::Conflict(err.to_string())
            }
            PostRuleError::CommentNotFound => Error::NotFound(err.to_string()),
        }
    }
}

/// Stored post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    /// Optimistic concurrency counter, bumped on every save
    #[serde(skip)]
    pub version: i32,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(user_id: Uuid, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            version: 0,
            created_at: Utc::now(),
        }
    }

    pub fn is_owner(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    pub fn has_liked(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user_id)
    }

    /// Record a like at the head of the sequence
    pub fn like(&mut self, user_id: Uuid) -> Result<(), PostRuleError> {
        if self.has_liked(user_id) {
            return Err(PostRuleError::AlreadyLiked);
        }
        self.likes.insert(
            0,
            Like {
                id: Uuid::new_v4(),
                user: user_id,
            },
        );
        Ok(())
    }

    /// Remove the user's like
    pub fn unlike(&mut self, user_id: Uuid) -> Result<Like, PostRuleError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user == user_id)
            .ok_or(PostRuleError::NotLiked)?;
        Ok(self.likes.remove(index))
    }

    /// Prepend a new comment and return it
    pub fn add_comment(
        &mut self,
        user_id: Uuid,
        text: String,
        name: String,
        avatar: String,
    ) -> &Comment {
        self.comments.insert(
            0,
            Comment {
                id: Uuid::new_v4(),
                user: user_id,
                text,
                name,
                avatar,
                date: Utc::now(),
            },
        );
        &self.comments[0]
    }

    pub fn find_comment(&self, comment_id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    pub fn remove_comment(&mut self, comment_id: Uuid) -> Result<Comment, PostRuleError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(PostRuleError::CommentNotFound)?;
        Ok(self.comments.remove(index))
    }

    /// Comment authors and the post owner may remove a comment
    pub fn can_remove_comment(&self, comment: &Comment, user_id: Uuid) -> bool {
        comment.user == user_id || self.is_owner(user_id)
    }
}
