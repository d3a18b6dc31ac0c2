//! Route definitions for Posts domain API

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{comments, likes, posts};
use super::middleware::PostsState;

/// Create all Posts domain API routes
pub fn routes() -> Router<PostsState> {
    Router::new()
        .route("/api/posts/test", get(posts::test))
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/posts/{id}",
            get(posts::get_post).delete(posts::delete_post),
        )
        // Likes
        .route("/api/posts/like/{id}", post(likes::like_post))
        .route("/api/posts/unlike/{id}", post(likes::unlike_post))
        // Comments
        .route("/api/posts/comment/{id}", post(comments::add_comment))
        .route(
            "/api/posts/comment/{id}/{comment_id}",
            delete(comments::remove_comment),
        )
}
