//! Session token issuing, validation and extraction helpers

use axum::http::HeaderValue;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::context::AuthIdentity;
use crate::error::AuthError;

/// Scheme prefix used in both the Authorization header and login responses
pub const BEARER_PREFIX: &str = "Bearer ";

/// Sign a session token for an identity
pub(crate) fn issue_jwt_token(
    identity: &AuthIdentity,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: identity.id.to_string(),
        name: identity.name.clone(),
        avatar: identity.avatar.clone(),
        iat: now as u64,
        exp: (now + config.token_ttl_secs) as u64,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = %identity.id, "Failed to sign session token");
        AuthError::TokenIssueFailed
    })
}

/// Validate a session token
pub(crate) fn validate_jwt_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    if let Some(aud) = &config.audience {
        validation.set_audience(&[aud]);
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    match header_str.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}
