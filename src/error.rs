//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

use crate::features::{vector::describe_violations, TransformError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input outside the widget bounds
    #[error("{0}")]
    ValidationError(String),

    // Value outside the log1p domain
    #[error("{0}")]
    DomainError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DomainError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Message shown to the user
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg) | AppError::DomainError(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), "Prediction rejected: {}", self);

        let body = Json(json!({
            "error": self.message(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(describe_violations(&errors))
    }
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        AppError::DomainError(err.to_string())
    }
}
