//! Users domain state and auth backend integration

use crate::UserRepository;
use axum::extract::FromRef;
use postboard_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Users domain
#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn UserRepository>,
    pub auth: AuthBackend,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl FromRef<UsersState> for AuthBackend {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}
