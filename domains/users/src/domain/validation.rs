//! Request payloads and their validation rules
//!
//! Missing fields deserialize to empty strings so they are reported per
//! field alongside every other rule violation.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Strip surrounding whitespace before any rule sees the value
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Registration payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 30, message = "Name must be between 2 and 30 characters"))]
    pub name: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords must match"))]
    pub password2: String,
}

/// Login payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password field is required"))]
    pub password: String,
}
