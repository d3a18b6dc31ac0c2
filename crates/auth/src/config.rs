//! Authentication configuration

use postboard_common::config::{Config, DEFAULT_TOKEN_TTL_SECS};

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    /// Session token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    /// Config with only a secret; no issuer/audience checks, default lifetime
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            issuer: None,
            audience: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }
}
