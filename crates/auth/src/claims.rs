//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by a Postboard session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name at the time of login
    pub name: String,
    /// Avatar URL at the time of login
    pub avatar: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Issuer, present only when configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Audience, present only when configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}
