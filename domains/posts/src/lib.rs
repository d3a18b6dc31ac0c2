//! Posts domain: posts with embedded likes and comments

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Comment, Like, Post, PostRuleError};
pub use domain::validation::PostRequest;

// Re-export repository types
pub use repository::{InMemoryPostRepository, PgPostRepository, PostRepository};

// Re-export API types
pub use api::routes;
pub use api::PostsState;
