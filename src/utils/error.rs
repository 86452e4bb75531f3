use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Every way a request can end other than success. All variants are
/// terminal for the triggering request; nothing is retried internally.
/// `StorageFailure` is the only unexpected lower-layer fault, the rest are
/// ordinary business outcomes callers branch on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Poll not found: {0}")]
    PollNotFound(String),
    #[error("Choice not found: {0}")]
    ChoiceNotFound(String),
    #[error("Duplicate choice: {0}")]
    DuplicateChoice(String),
    #[error("Poll expired: {0}")]
    PollExpired(String),
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::InvalidInput(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_INPUT",
                msg,
            ),
            AppError::PollNotFound(msg) => (
                StatusCode::NOT_FOUND,
                "POLL_NOT_FOUND",
                msg,
            ),
            AppError::ChoiceNotFound(msg) => (
                StatusCode::NOT_FOUND,
                "CHOICE_NOT_FOUND",
                msg,
            ),
            AppError::DuplicateChoice(msg) => (
                StatusCode::CONFLICT,
                "DUPLICATE_CHOICE",
                msg,
            ),
            AppError::PollExpired(msg) => (
                StatusCode::FORBIDDEN,
                "POLL_EXPIRED",
                msg,
            ),
            AppError::StorageFailure(msg) => {
                tracing::error!("storage failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_FAILURE",
                    "Storage operation failed".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::StorageFailure(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::StorageFailure(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for AppError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        AppError::StorageFailure(err.to_string())
    }
}
