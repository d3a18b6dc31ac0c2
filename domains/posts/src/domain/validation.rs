//! Post and comment payload validation

use serde::Deserialize;
use validator::Validate;

/// Payload shared by post creation and commenting
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PostRequest {
    #[validate(length(min = 10, max = 300, message = "Post must be between 10 and 300 characters"))]
    pub text: String,

    /// Display name; the author's name when omitted
    pub name: Option<String>,

    /// Avatar URL; the author's avatar when omitted
    pub avatar: Option<String>,
}

impl PostRequest {
    /// Resolve the display name and avatar against the author's defaults
    pub fn display(&self, default_name: &str, default_avatar: &str) -> (String, String) {
        let pick = |value: &Option<String>, default: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        (
            pick(&self.name, default_name),
            pick(&self.avatar, default_avatar),
        )
    }
}
