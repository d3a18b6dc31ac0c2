//! Comment API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use postboard_auth::AuthUser;
use postboard_common::{Error, Result, ValidatedJson};

use super::posts::{load_post, save_post};
use crate::api::middleware::PostsState;
use crate::domain::entities::{Post, PostRuleError};
use crate::domain::validation::PostRequest;

/// POST /api/posts/comment/{id} - Add a comment to a post
pub async fn add_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<PostRequest>,
) -> Result<Json<Post>> {
    let mut post = load_post(&state, &id).await?;

    let (name, avatar) = req.display(&ctx.user.name, &ctx.user.avatar);
    let comment_id = post.add_comment(ctx.user_id(), req.text, name, avatar).id;
    let saved = save_post(&state, &post).await?;

    tracing::info!(
        post_id = %saved.id,
        comment_id = %comment_id,
        user_id = %ctx.user_id(),
        "Comment added"
    );

    Ok(Json(saved))
}

/// DELETE /api/posts/comment/{id}/{comment_id} - Remove a comment
pub async fn remove_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Post>> {
    let mut post = load_post(&state, &id).await?;

    let not_found = PostRuleError::CommentNotFound.to_string();
    let comment_id = postboard_common::parse_id(&comment_id, &not_found)?;
    let comment = post
        .find_comment(comment_id)
        .ok_or(PostRuleError::CommentNotFound)?;

    if !post.can_remove_comment(comment, ctx.user_id()) {
        return Err(Error::Authorization("User not authorized".to_string()));
    }

    post.remove_comment(comment_id)?;
    let saved = save_post(&state, &post).await?;

    tracing::info!(
        post_id = %saved.id,
        comment_id = %comment_id,
        user_id = %ctx.user_id(),
        "Comment removed"
    );

    Ok(Json(saved))
}
