// ABOUTME: API error type and structured JSON error responses
// ABOUTME: Maps domain failures to HTTP status codes and machine-readable codes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use folio_auth::AuthError;
use folio_core::ValidationError;
use folio_projects::PipelineError;
use folio_storage::StorageError;

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    Validation(Vec<ValidationError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: ErrorDetail,
    request_id: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationError>>,
}

impl AppError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Forbidden { .. } => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            AppError::Configuration(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "CONFIGURATION_ERROR")
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message safe to show to a visitor
    fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => {
                format!("Validation failed: {} error(s)", errors.len())
            }
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(what) => format!("{} not found", what),
            AppError::Unauthorized => "Authentication required".to_string(),
            AppError::Forbidden { message } => message.clone(),
            AppError::Upstream(msg) => format!("Upstream service error: {}", msg),
            AppError::Configuration(_) => "Server configuration error".to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();

        match &self {
            AppError::Internal(err) => {
                error!(request_id = %request_id, error = %err, "Internal server error occurred");
            }
            AppError::Upstream(msg) | AppError::Configuration(msg) => {
                error!(request_id = %request_id, error_code = %error_code, error = %msg, "Dependency failure");
            }
            _ => {
                info!(request_id = %request_id, error_code = %error_code, error = %self, "API error response");
            }
        }

        let message = self.to_user_message();
        let details = match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                details,
            },
            request_id,
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(what) => AppError::NotFound(what),
            StorageError::Validation(errors) => AppError::Validation(errors),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAllowed => AppError::forbidden("This email is not authorized for admin access"),
            AuthError::InvalidToken => AppError::Unauthorized,
            AuthError::Configuration(msg) => AppError::Configuration(msg),
            AuthError::Provider(msg) => AppError::Upstream(msg),
            AuthError::Http(e) => AppError::Upstream(e.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, AppError>;
