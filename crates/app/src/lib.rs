//! Postboard application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use postboard_auth::{AuthBackend, AuthConfig, IdentityStore, PgIdentityStore};
use postboard_common::{Config, StorageProvider};
use postboard_posts::{InMemoryPostRepository, PgPostRepository, PostRepository, PostsState};
use postboard_users::{InMemoryUserRepository, PgUserRepository, UserRepository, UsersState};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
};

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Storage handles shared by the domain states
struct Repositories {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    identities: Arc<dyn IdentityStore>,
}

impl Repositories {
    fn for_provider(provider: StorageProvider, pool: Option<PgPool>) -> anyhow::Result<Self> {
        match provider {
            StorageProvider::Memory => {
                let users = Arc::new(InMemoryUserRepository::new());
                Ok(Self {
                    users: users.clone(),
                    posts: Arc::new(InMemoryPostRepository::new()),
                    identities: users,
                })
            }
            StorageProvider::Postgres => {
                let pool = pool.context("postgres storage provider requires a database pool")?;
                Ok(Self {
                    users: Arc::new(PgUserRepository::new(pool.clone())),
                    posts: Arc::new(PgPostRepository::new(pool.clone())),
                    identities: Arc::new(PgIdentityStore::new(pool)),
                })
            }
        }
    }
}

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: Option<PgPool>) -> anyhow::Result<Router> {
    let repos = Repositories::for_provider(config.storage_provider, pool)?;

    let auth = AuthBackend::new(repos.identities, AuthConfig::from(config));

    let users_state = UsersState {
        users: repos.users,
        auth: auth.clone(),
        bcrypt_cost: config.bcrypt_cost,
    };
    let posts_state = PostsState {
        posts: repos.posts,
        auth,
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Postboard API v0.1.0" }),
        )
        .merge(postboard_users::routes().with_state(users_state))
        .merge(postboard_posts::routes().with_state(posts_state))
        .layer(build_cors_layer(config.cors_allowed_origins.as_deref())?)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    tracing::debug!(provider = ?config.storage_provider, "Application router built");

    Ok(app)
}

/// Permissive CORS when no origins are configured, otherwise an allow-list
pub fn build_cors_layer(allowed_origins: Option<&str>) -> anyhow::Result<CorsLayer> {
    let Some(raw) = allowed_origins.filter(|s| !s.trim().is_empty()) else {
        return Ok(CorsLayer::permissive());
    };

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
