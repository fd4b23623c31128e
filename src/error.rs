use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Failures raised by [`crate::repository::TodoStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("todo store lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("Invalid form body: {0}")]
    Form(#[from] FormRejection),

    #[error("Invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Todo not found")]
    NotFound,

    #[error("Invalid ID format")]
    InvalidId,

    #[error("Endpoint not found")]
    EndpointNotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Store(StoreError::Validation(msg)) => {
                warn!("rejected todo input: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Store(e @ StoreError::LockPoisoned) => {
                error!("store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Body(rejection) => {
                warn!("rejected request body: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            AppError::Form(rejection) => {
                warn!("rejected form body: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            e @ AppError::Decode(_) => {
                warn!("{}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            e @ (AppError::NotFound | AppError::EndpointNotFound) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            e @ AppError::InvalidId => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),

    #[error("invalid listen address {0:?}")]
    InvalidAddress(String),
}
