//! PostgreSQL post repository
//!
//! Likes and comments live in JSONB columns on the post row.

use chrono::{DateTime, Utc};
use postboard_common::RepositoryError;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::PostRepository;
use crate::domain::entities::{Comment, Like, Post};

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: String,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    version: i32,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            text: row.text,
            name: row.name,
            avatar: row.avatar,
            likes: row.likes.0,
            comments: row.comments.0,
            version: row.version,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PostRepository for PgPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, user_id, text, name, avatar, likes, comments, version, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, user_id, text, name, avatar, likes, comments, version, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn create(&self, post: &Post) -> Result<Post, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, user_id, text, name, avatar, likes, comments, version, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, text, name, avatar, likes, comments, version, created_at
            "#,
        )
        .bind(post.id)
        .bind(post.user_id)
        .bind(&post.text)
        .bind(&post.name)
        .bind(&post.avatar)
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .bind(post.version)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn save(&self, post: &Post) -> Result<Post, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET likes = $3, comments = $4, version = version + 1
            WHERE id = $1 AND version = $2
            RETURNING id, user_id, text, name, avatar, likes, comments, version, created_at
            "#,
        )
        .bind(post.id)
        .bind(post.version)
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            return Ok(row.into());
        }

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(post.id)
            .fetch_one(&self.pool)
            .await?;

        if exists {
            tracing::debug!(post_id = %post.id, version = post.version, "Rejected stale post write");
            Err(RepositoryError::StaleVersion)
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
