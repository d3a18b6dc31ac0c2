//! Users domain: registration, login, current identity

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{User, UserResponse};
pub use domain::gravatar::gravatar_url;
pub use domain::password::{hash_password, verify_password};

// Re-export repository types
pub use repository::{InMemoryUserRepository, PgUserRepository, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::UsersState;
