// HTTP API Error Types
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::ValidationErrors;

use crate::database::StoreError;
use crate::middleware::response::Envelope;

/// Errors surfaced at the handler boundary. The client only ever sees the
/// generic message; the detail is logged.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    Validation(ValidationErrors),

    // 404 Not Found
    NotFound(String),

    // 410 Gone
    Gone(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Gone(_) => StatusCode::GONE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => "Bad Request",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Gone(_) => "Resource is gone",
            ApiError::InternalServerError(_) => "Internal Server Error",
        }
    }

    fn log(&self) {
        match self {
            ApiError::BadRequest(detail) => {
                tracing::warn!("Invalid data format was sent to the server: {}", detail)
            }
            ApiError::Validation(errors) => {
                tracing::warn!("Invalid data format was sent to the server: {:?}", errors.field_errors())
            }
            ApiError::NotFound(detail) => tracing::debug!("No route for {}", detail),
            ApiError::Gone(detail) => tracing::warn!("Resource was not found: {}", detail),
            ApiError::InternalServerError(detail) => {
                tracing::error!("Internal server error was: {}", detail)
            }
        }
    }
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError::BadRequest(detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::NotFound(detail.into())
    }

    pub fn gone(detail: impl Into<String>) -> Self {
        ApiError::Gone(detail.into())
    }

    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        ApiError::InternalServerError(detail.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Don't expose internal SQL errors to clients
        ApiError::internal_server_error(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        self.log();
        let envelope = Envelope::<()>::failure(self.message());
        (self.status_code(), Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn gone_renders_failure_envelope() {
        let (status, body) = render(ApiError::gone("product 9")).await;
        assert_eq!(status, StatusCode::GONE);
        assert_eq!(
            body,
            json!({ "success": false, "data": null, "message": "Resource is gone" })
        );
    }

    #[tokio::test]
    async fn store_errors_hide_their_detail() {
        let err: ApiError = StoreError::Sqlx(sqlx::Error::RowNotFound).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
        assert!(!body.to_string().contains("no rows"));
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests() {
        let err: ApiError = ValidationErrors::new().into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Bad Request");
        assert_eq!(body["success"], false);
    }
}
