//! Gravatar avatar URLs

use super::entities::normalize_email;

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// Avatar size in pixels
const SIZE: u32 = 200;

/// Content rating
const RATING: &str = "pg";

/// Fallback image when the address has no gravatar ("mystery man")
const DEFAULT_IMAGE: &str = "mm";

/// Deterministic avatar URL for an email address
pub fn gravatar_url(email: &str) -> String {
    let digest = md5::compute(normalize_email(email).as_bytes());
    format!(
        "{}/{:x}?s={}&r={}&d={}",
        GRAVATAR_BASE, digest, SIZE, RATING, DEFAULT_IMAGE
    )
}
