// src/error.rs
//! Error types for transport collaborators.
//!
//! The toolkit's own functions are total: discriminators, extractors, and
//! renderers return empty/`None` fallbacks instead of failing, and the
//! pagination engine is generic over whatever error type the supplied list
//! call produces, so transport failures propagate through it unchanged.
//! What lives here is the typed vocabulary a transport implementation needs
//! when it turns raw HTTP responses into the shapes this crate consumes.

use std::fmt;
use thiserror::Error;

/// Maximum number of body characters kept in a deserialization error.
const BODY_PREVIEW_LEN: usize = 500;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`, the
/// domain vocabulary is encoded in the type system, enabling pattern-based
/// recovery without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded — back off and retry
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Error type for transport implementations built on this toolkit.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Notion API returned an error ({code}): {message}")]
    Api {
        code: NotionErrorCode,
        message: String,
        status: u16,
    },

    #[error("failed to deserialize response body: {source}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Wire shape of a Notion API error body.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NotionApiErrorResponse {
    pub code: String,
    pub message: String,
}

/// Parse a transport `(status, body)` pair into a typed object response.
///
/// Success bodies deserialize into `T`; error bodies are parsed into the
/// typed error vocabulary, falling back to the raw HTTP status when the
/// error body itself is unparseable.
pub fn parse_response<T>(status: u16, body: &str) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(|e| {
            log::debug!("response body failed to deserialize: {}", e);
            Error::Deserialization {
                source: e,
                body: body_preview(body),
            }
        })
    } else if let Ok(api_error) = serde_json::from_str::<NotionApiErrorResponse>(body) {
        Err(Error::Api {
            code: NotionErrorCode::from_api_response(&api_error.code),
            message: api_error.message,
            status,
        })
    } else {
        Err(Error::Api {
            code: NotionErrorCode::from_http_status(status),
            message: format!("HTTP {}", status),
            status,
        })
    }
}

/// Parse a transport response into a paginated list of `T`.
pub fn parse_list_response<T>(
    status: u16,
    body: &str,
) -> Result<crate::api::PaginatedResponse<T>, Error>
where
    T: serde::de::DeserializeOwned,
{
    parse_response(status, body)
}

fn body_preview(body: &str) -> String {
    if body.len() > BODY_PREVIEW_LEN {
        let mut end = BODY_PREVIEW_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_code_round_trips_through_display() {
        let codes = [
            "rate_limited",
            "object_not_found",
            "unauthorized",
            "restricted_resource",
            "invalid_json",
            "validation_error",
            "conflict_error",
            "internal_server_error",
            "service_unavailable",
        ];
        for code in codes {
            assert_eq!(
                NotionErrorCode::from_api_response(code).to_string(),
                code.to_string()
            );
        }
    }

    #[test]
    fn unknown_error_code_is_preserved() {
        let code = NotionErrorCode::from_api_response("brand_new_code");
        assert_eq!(code, NotionErrorCode::Unknown("brand_new_code".into()));
        assert!(!code.is_retryable());
    }

    #[test]
    fn retryable_codes() {
        assert!(NotionErrorCode::RateLimited.is_retryable());
        assert!(NotionErrorCode::ServiceUnavailable.is_retryable());
        assert!(!NotionErrorCode::ObjectNotFound.is_retryable());
        assert!(NotionErrorCode::ObjectNotFound.is_not_found());
    }

    #[test]
    fn parse_response_maps_error_bodies() {
        let body = r#"{"object":"error","code":"object_not_found","message":"Could not find page"}"#;
        let result = parse_response::<serde_json::Value>(404, body);
        match result {
            Err(Error::Api { code, status, .. }) => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(status, 404);
            }
            other => panic!("expected Api error, got {:?}", other.err()),
        }
    }

    #[test]
    fn parse_response_falls_back_to_http_status() {
        let result = parse_response::<serde_json::Value>(502, "<html>bad gateway</html>");
        match result {
            Err(Error::Api { code, .. }) => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("expected Api error, got {:?}", other.err()),
        }
    }

    #[test]
    fn deserialization_error_keeps_body_preview() {
        let body = "x".repeat(600);
        let result = parse_response::<serde_json::Value>(200, &body);
        match result {
            Err(Error::Deserialization { body, .. }) => {
                assert_eq!(body.len(), 503); // preview + ellipsis
            }
            other => panic!("expected Deserialization error, got {:?}", other.err()),
        }
    }
}
