//! Custom axum extractors for Postboard

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, FieldErrors, Result};

/// JSON extractor that validates the deserialized value automatically.
///
/// Malformed bodies are rejected with `Error::Validation`; payloads that
/// deserialize but fail their `Validate` rules are rejected with
/// `Error::InvalidFields` carrying one message per offending field.
/// Both render as 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(
                e @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)),
            ) => Error::Validation(e.body_text()).into_response(),
            // Content type and body size rejections keep their own status
            ValidatedJsonRejection::Json(e) => (
                e.status(),
                Json(json!({
                    "error": {
                        "code": "INVALID_REQUEST_BODY",
                        "message": e.body_text(),
                    }
                })),
            )
                .into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        check(&value).map_err(ValidatedJsonRejection::Validation)?;
        Ok(ValidatedJson(value))
    }
}

/// Run a payload's validation rules, collecting one message per field
pub fn check<T: Validate>(value: &T) -> Result<()> {
    match value.validate() {
        Ok(()) => Ok(()),
        Err(errors) => FieldErrors::from(&errors).into_result(),
    }
}

/// Parse a path identifier; anything that is not a UUID cannot name a
/// stored document, so it is reported as not found.
pub fn parse_id(raw: &str, not_found_message: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound(not_found_message.to_string()))
}
