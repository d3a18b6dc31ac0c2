//! Like API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use postboard_auth::AuthUser;
use postboard_common::Result;

use super::posts::{load_post, save_post};
use crate::api::middleware::PostsState;
use crate::domain::entities::Post;

/// POST /api/posts/like/{id} - Like a post once
pub async fn like_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    let mut post = load_post(&state, &id).await?;
    post.like(ctx.user_id())?;
    let saved = save_post(&state, &post).await?;

    tracing::debug!(post_id = %saved.id, user_id = %ctx.user_id(), "Post liked");

    Ok(Json(saved))
}

/// POST /api/posts/unlike/{id} - Remove the caller's like
pub async fn unlike_post(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    let mut post = load_post(&state, &id).await?;
    post.unlike(ctx.user_id())?;
    let saved = save_post(&state, &post).await?;

    tracing::debug!(post_id = %saved.id, user_id = %ctx.user_id(), "Post unliked");

    Ok(Json(saved))
}
