use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::store::StoreError;

/// Used when even the error envelope cannot be serialized.
const FALLBACK_ENVELOPE: &str = r#"{"error":"serialization error"}"#;

/// Errors a handler can answer with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body did not decode. Answered with an error envelope.
    #[error("{0}")]
    BadRequest(String),

    /// Unknown item id. Answered with an empty body.
    #[error("not found")]
    NotFound,

    /// Anything the server could not complete. Answered with an error envelope.
    #[error("{0}")]
    Internal(String),
}

/// `{"error": "<message>"}`
#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a str,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Serialize `message` into the error envelope.
#[must_use]
pub fn to_error_json(message: &str) -> String {
    serde_json::to_string(&ErrorEnvelope { error: message })
        .unwrap_or_else(|_| FALLBACK_ENVELOPE.to_string())
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::SequenceExhausted => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound => status.into_response(),
            ApiError::BadRequest(message) | ApiError::Internal(message) => {
                if status.is_server_error() {
                    warn!(status = %status.as_u16(), error = %message, "Request failed");
                }
                (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Body::from(to_error_json(&message)),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_format() {
        let json = to_error_json("unexpected end of input");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!({"error": "unexpected end of input"}));
    }

    #[test]
    fn test_error_json_escapes_quotes() {
        let json = to_error_json(r#"expected "Name""#);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["error"], r#"expected "Name""#);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest(String::new()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            ApiError::from(StoreError::not_found("item-1")),
            ApiError::NotFound
        );
        assert!(matches!(
            ApiError::from(StoreError::SequenceExhausted),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_not_found_response_has_empty_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_bad_request_response_is_json() {
        let response = ApiError::BadRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
