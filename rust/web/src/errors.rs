/// Error handling for the HTTP surface of convoca_web
///
/// This module provides:
/// - The JSON error body shared by every endpoint
/// - A trait mapping domain errors to status codes and log levels
use serde::{Deserialize, Serialize};
use std::fmt;
use warp::http::header::{HeaderValue, ALLOW};
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::Reply;

/// Standard error body for all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "convocation_not_found")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn into_response(self, status: StatusCode) -> Response {
        reply::with_status(reply::json(&self), status).into_response()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Error classification for logging levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Client errors (4xx), expected in normal operation
    Client,
    /// Server errors (5xx), need investigation
    Server,
}

/// Converts a domain error into a logged HTTP response
pub trait IntoErrorResponse {
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error code
    fn error_code(&self) -> &'static str;

    fn error_message(&self) -> String;

    fn error_details(&self) -> Option<serde_json::Value> {
        None
    }

    /// Value for the `Allow` header on 405 responses
    fn allowed_methods(&self) -> Option<&'static str> {
        None
    }

    fn severity(&self) -> ErrorSeverity {
        if self.status_code().is_server_error() {
            ErrorSeverity::Server
        } else {
            ErrorSeverity::Client
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        match self.error_details() {
            Some(details) => {
                ErrorResponse::with_details(self.error_code(), self.error_message(), details)
            }
            None => ErrorResponse::new(self.error_code(), self.error_message()),
        }
    }

    fn into_http_response(self) -> Response
    where
        Self: Sized,
    {
        let status = self.status_code();
        let body = self.to_error_response();

        match self.severity() {
            ErrorSeverity::Client => tracing::info!(
                status = status.as_u16(),
                error = %body.error,
                "client error: {}",
                body.message
            ),
            ErrorSeverity::Server => tracing::error!(
                status = status.as_u16(),
                error = %body.error,
                "server error: {}",
                body.message
            ),
        }

        let mut response = body.into_response(status);
        if let Some(methods) = self.allowed_methods() {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static(methods));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Teapot;

    impl IntoErrorResponse for Teapot {
        fn status_code(&self) -> StatusCode {
            StatusCode::METHOD_NOT_ALLOWED
        }
        fn error_code(&self) -> &'static str {
            "teapot"
        }
        fn error_message(&self) -> String {
            "short and stout".into()
        }
        fn allowed_methods(&self) -> Option<&'static str> {
            Some("GET")
        }
    }

    #[test]
    fn error_response_serialization() {
        let error = ErrorResponse::new("test_error", "Test error message");
        let json = serde_json::to_value(&error).expect("serialize");

        assert_eq!(json["error"], "test_error");
        assert_eq!(json["message"], "Test error message");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn error_response_with_details() {
        let error = ErrorResponse::with_details(
            "convocation_not_found",
            "missing",
            json!({ "convocation_id": "c-1" }),
        );
        let json = serde_json::to_value(&error).expect("serialize");
        assert_eq!(json["details"]["convocation_id"], "c-1");
    }

    #[test]
    fn error_response_display() {
        let error = ErrorResponse::new("not_found", "Resource not found");
        assert_eq!(error.to_string(), "not_found: Resource not found");
    }

    #[test]
    fn allow_header_is_attached() {
        let response = Teapot.into_http_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "GET");
    }

    #[test]
    fn severity_follows_status_class() {
        assert_eq!(Teapot.severity(), ErrorSeverity::Client);
    }
}
