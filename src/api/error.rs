//! API Errors
//!
//! Every failure from the remote service is normalized to [`ApiError`]:
//! a human-readable message plus optional field-level detail.

use serde::Deserialize;
use thiserror::Error;

/// Normalized API failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", .errors.as_ref().map(|e| format!(": {}", e)).unwrap_or_default())]
pub struct ApiError {
    /// HTTP status, `None` for transport or decode failures
    pub status: Option<u16>,
    pub message: String,
    pub errors: Option<String>,
}

/// Error body as sent by the server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            errors: None,
        }
    }

    /// Build from a non-success response body, using `fallback` when the
    /// body carries no usable message.
    pub fn from_body(status: u16, body: &str, fallback: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let (message, errors) = match parsed {
            Some(ErrorBody { message, errors }) => (message, errors),
            None => (None, None),
        };
        Self {
            status: Some(status),
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
            errors: errors.and_then(detail_text),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// Detail as display text; strings are used verbatim, other JSON compactly
fn detail_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::new(format!("Network error: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_errors() {
        let err = ApiError::from_body(400, r#"{"message":"Validation failed","errors":"title too long"}"#, "Failed");
        assert_eq!(err.status, Some(400));
        assert_eq!(err.to_string(), "Validation failed: title too long");
    }

    #[test]
    fn test_message_only() {
        let err = ApiError::from_body(409, r#"{"message":"User already exists"}"#, "Sign up failed");
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(err.errors, None);
    }

    #[test]
    fn test_structured_errors_are_rendered_as_json() {
        let err = ApiError::from_body(422, r#"{"message":"Bad input","errors":{"email":"invalid"}}"#, "x");
        assert_eq!(err.to_string(), r#"Bad input: {"email":"invalid"}"#);
    }

    #[test]
    fn test_unparseable_body_uses_fallback() {
        let err = ApiError::from_body(500, "<html>oops</html>", "Failed to create content");
        assert_eq!(err.to_string(), "Failed to create content");
        let err = ApiError::from_body(500, r#"{"message":"  "}"#, "Failed to delete content");
        assert_eq!(err.message, "Failed to delete content");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_body(401, "", "Login failed").is_unauthorized());
        assert!(!ApiError::new("boom").is_unauthorized());
    }
}
