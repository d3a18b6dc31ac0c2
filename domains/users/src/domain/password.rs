//! Password hashing
//!
//! bcrypt generates a fresh random salt per hash and embeds it in the
//! output. Both operations are CPU-bound and run on the blocking pool.

use postboard_common::{Error, Result};

/// Hash a plaintext password with the given bcrypt cost
pub async fn hash_password(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| Error::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            Error::Internal("Failed to hash password".to_string())
        })
}

/// Compare a plaintext password against a stored bcrypt hash
pub async fn verify_password(password: String, password_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| Error::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| {
            tracing::error!(error = %e, "Stored password hash is unreadable");
            Error::Internal("Failed to verify password".to_string())
        })
}
