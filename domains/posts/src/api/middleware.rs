//! Posts domain state and auth backend integration

use crate::PostRepository;
use axum::extract::FromRef;
use postboard_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Posts domain
#[derive(Clone)]
pub struct PostsState {
    pub posts: Arc<dyn PostRepository>,
    pub auth: AuthBackend,
}

impl FromRef<PostsState> for AuthBackend {
    fn from_ref(state: &PostsState) -> Self {
        state.auth.clone()
    }
}
