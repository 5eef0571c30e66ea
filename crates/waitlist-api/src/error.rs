//! Error types for the waitlist API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::registry::DuplicateEmail;

/// API error taxonomy. Display strings are the caller-facing messages.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Business-rule rejection; carries the offending email for logs.
    #[error("This email is already on the waitlist")]
    AlreadyOnWaitlist(String),

    /// Payload failed the schema or the structural email check.
    #[error("Invalid email format")]
    InvalidEmail(Vec<FieldError>),

    /// Anything unexpected. Logged in full, never shown to the caller.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn email(message: impl Into<String>) -> Self {
        Self {
            field: "email".into(),
            message: message.into(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            ApiError::AlreadyOnWaitlist(_) => (StatusCode::BAD_REQUEST, None),
            ApiError::InvalidEmail(failures) => (StatusCode::BAD_REQUEST, Some(failures.clone())),
            ApiError::Internal(source) => {
                tracing::error!(error = ?source, "unexpected failure handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorResponse {
            message: self.to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DuplicateEmail> for ApiError {
    fn from(e: DuplicateEmail) -> Self {
        ApiError::AlreadyOnWaitlist(e.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_maps_to_bad_request() {
        let response = ApiError::AlreadyOnWaitlist("a@example.com".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "This email is already on the waitlist");
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_invalid_email_includes_failure_list() {
        let response =
            ApiError::InvalidEmail(vec![FieldError::email("must contain '@'")]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Invalid email format");
        assert_eq!(json["errors"][0]["field"], "email");
        assert_eq!(json["errors"][0]["message"], "must contain '@'");
    }

    #[tokio::test]
    async fn test_internal_error_detail_is_not_leaked() {
        let response =
            ApiError::Internal(anyhow::anyhow!("registry exploded at 0xdeadbeef")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Internal server error");
        assert!(json.get("errors").is_none());
    }
}
