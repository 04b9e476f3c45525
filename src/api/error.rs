// SPDX-License-Identifier: MPL-2.0
//! Error types for the campaign backend client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to the campaign backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure (connection refused, DNS, reset, body read).
    #[error("connection error: {0}")]
    Connection(String),

    /// Non-success HTTP status, with the server's `detail` when present.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Http { status: u16, detail: Option<String> },

    /// A success body that does not match the expected shape.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    /// Local file read or write failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Client construction or request building failure.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Best message to show the user.
    ///
    /// A server-provided `detail` wins; an HTTP error without one yields
    /// `fallback`. Other errors report their own description.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Http { detail: None, .. } => fallback.to_string(),
            ApiError::Connection(msg)
            | ApiError::Deserialization(msg)
            | ApiError::Io(msg)
            | ApiError::Configuration(msg) => msg.clone(),
        }
    }

    /// HTTP status code, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds an HTTP error from a status and raw response body.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        ApiError::Http {
            status,
            detail: parse_detail(body),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extracts a non-empty `detail` from an error body.
///
/// Validation errors send `detail` as a structured value; it is rendered as
/// compact JSON rather than dropped.
fn parse_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    let detail = match parsed.detail? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => return None,
        other => other.to_string(),
    };
    (!detail.is_empty()).then_some(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_server_detail() {
        let err = ApiError::from_response(409, br#"{"detail": "Campaign already exists"}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message("fallback"), "Campaign already exists");
    }

    #[test]
    fn http_error_without_detail_uses_fallback() {
        let err = ApiError::from_response(500, b"<html>Bad gateway</html>");
        assert_eq!(err.user_message("An unknown error occurred."), "An unknown error occurred.");
    }

    #[test]
    fn empty_detail_counts_as_missing() {
        let err = ApiError::from_response(400, br#"{"detail": ""}"#);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let err = ApiError::from_response(422, br#"{"detail": [{"loc": ["body"]}]}"#);
        assert_eq!(err.user_message("fallback"), r#"[{"loc":["body"]}]"#);
    }

    #[test]
    fn connection_error_reports_its_text() {
        let err = ApiError::Connection("connection refused".into());
        assert_eq!(err.user_message("fallback"), "connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Http {
            status: 404,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP 404: no detail");
    }
}
