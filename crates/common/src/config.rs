//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default session token lifetime in seconds
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Where documents are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StorageProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageProvider::Postgres),
            "memory" | "mock" => Ok(StorageProvider::Memory),
            other => Err(anyhow::anyhow!("Unknown STORAGE_PROVIDER: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storage backend selection
    pub storage_provider: StorageProvider,

    /// Database connection URL (required for the postgres provider)
    pub database_url: Option<String>,

    /// Session token signing
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
    pub token_ttl_secs: i64,

    /// Password hashing work factor
    pub bcrypt_cost: u32,

    /// Comma-separated CORS origins, permissive when unset
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_provider = match lookup("STORAGE_PROVIDER") {
            Some(value) => value.parse()?,
            None => StorageProvider::default(),
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        if storage_provider == StorageProvider::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL is required when STORAGE_PROVIDER is postgres"
            ));
        }

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?;

        let token_ttl_secs = match lookup("TOKEN_TTL_SECS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or_else(|| anyhow::anyhow!("TOKEN_TTL_SECS must be a positive integer"))?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or_else(|| anyhow::anyhow!("BCRYPT_COST must be between 4 and 31"))?,
            None => DEFAULT_BCRYPT_COST,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .ok()
                .filter(|port| *port > 0)
                .ok_or_else(|| anyhow::anyhow!("PORT must be a valid port number"))?,
            None => DEFAULT_PORT,
        };

        let config = Self {
            storage_provider,
            database_url,
            jwt_secret,
            jwt_issuer: lookup("JWT_ISSUER"),
            jwt_audience: lookup("JWT_AUDIENCE"),
            token_ttl_secs,
            bcrypt_cost,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").filter(|o| !o.is_empty()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "postboard=debug".to_string()),
            port,
        };

        Ok(config)
    }
}
