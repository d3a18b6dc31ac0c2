//! Post API handlers
//!
//! Implements:
//! - GET /api/posts - List all posts, newest first
//! - GET /api/posts/{id} - Get one post
//! - POST /api/posts - Create a post
//! - DELETE /api/posts/{id} - Delete an owned post

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use postboard_auth::AuthUser;
use postboard_common::{parse_id, Error, RepositoryError, Result, ValidatedJson};
use serde_json::{json, Value};

use crate::api::middleware::PostsState;
use crate::domain::entities::Post;
use crate::domain::validation::PostRequest;

pub(crate) const POST_NOT_FOUND: &str = "No post found with that ID";

/// Load a post by its raw path id
pub(crate) async fn load_post(state: &PostsState, raw_id: &str) -> Result<Post> {
    let id = parse_id(raw_id, POST_NOT_FOUND)?;
    state
        .posts
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(POST_NOT_FOUND.to_string()))
}

/// Persist embedded-sequence edits made to a loaded post
pub(crate) async fn save_post(state: &PostsState, post: &Post) -> Result<Post> {
    state.posts.save(post).await.map_err(|e| match e {
        RepositoryError::StaleVersion => {
            Error::Conflict("Post was modified concurrently".to_string())
        }
        RepositoryError::NotFound => Error::NotFound(POST_NOT_FOUND.to_string()),
        other => Error::from(other),
    })
}

/// GET /api/posts/test
pub async fn test() -> Json<Value> {
    Json(json!({ "msg": "Posts works" }))
}

/// GET /api/posts - List all posts, newest first
pub async fn list_posts(State(state): State<PostsState>) -> Result<Json<Vec<Post>>> {
    let posts = state.posts.list().await?;
    Ok(Json(posts))
}

/// GET /api/posts/{id} - Get one post
pub async fn get_post(
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    let post = load_post(&state, &id).await?;
    Ok(Json(post))
}

/// POST /api/posts - Create a post owned by the caller
pub async fn create_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    ValidatedJson(req): ValidatedJson<PostRequest>,
) -> Result<(StatusCode, Json<Post>)> {
    let (name, avatar) = req.display(&ctx.user.name, &ctx.user.avatar);
    let post = Post::new(ctx.user_id(), req.text, name, avatar);

    let created = state.posts.create(&post).await?;

    tracing::info!(post_id = %created.id, user_id = %ctx.user_id(), "Post created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/posts/{id} - Delete a post; owner only
pub async fn delete_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let post = load_post(&state, &id).await?;

    if !ctx.is_user(post.user_id) {
        return Err(Error::Authorization("User not authorized".to_string()));
    }

    if !state.posts.delete(post.id).await? {
        return Err(Error::NotFound(POST_NOT_FOUND.to_string()));
    }

    tracing::info!(post_id = %post.id, user_id = %ctx.user_id(), "Post deleted");

    Ok(Json(json!({ "success": true })))
}
