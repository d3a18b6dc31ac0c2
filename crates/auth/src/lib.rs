//! Authentication for the Postboard API
//!
//! Issues and validates session tokens, resolves token subjects to stored
//! identities, and provides axum extractors that work with any domain state
//! implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use backend::{AuthBackend, IdentityStore, PgIdentityStore};
pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use context::{AuthContext, AuthIdentity};
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::BEARER_PREFIX;
