use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::render::pages::{render_error_page, ErrorPage};
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so API handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Upload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("A portfolio is already being generated")]
    IntakeBusy,

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::IntakeBusy | AppError::Storage(StoreError::AlreadyExists(_)) => {
                StatusCode::CONFLICT
            }
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine code and user-facing message. Server-side failures are logged
    /// here and replaced by a generic message.
    fn parts(&self) -> (&'static str, String) {
        match self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFileType(msg) => ("UNSUPPORTED_FILE_TYPE", msg.clone()),
            AppError::PayloadTooLarge { limit } => (
                "PAYLOAD_TOO_LARGE",
                format!("The file is larger than the {} MB limit", limit / (1024 * 1024)),
            ),
            AppError::IntakeBusy => (
                "INTAKE_BUSY",
                "Your portfolio is still being generated. Please wait for it to finish."
                    .to_string(),
            ),
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction error: {msg}");
                ("EXTRACTION_ERROR", "We could not read your resume.".to_string())
            }
            AppError::Storage(StoreError::AlreadyExists(key)) => {
                tracing::error!("Identifier collision on {key}");
                (
                    "ID_CONFLICT",
                    "Could not allocate a new portfolio identifier. Please try again.".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                ("STORAGE_ERROR", "A storage error occurred".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("INTERNAL_ERROR", "An internal server error occurred".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Error returned by page handlers: renders the Error state instead of JSON.
#[derive(Debug)]
pub struct PageError {
    pub error: AppError,
    /// Target of the "Try Again" action, when retrying makes sense.
    pub retry: Option<String>,
}

impl PageError {
    pub fn new(error: AppError) -> Self {
        Self { error, retry: None }
    }

    pub fn with_retry(error: AppError, retry: impl Into<String>) -> Self {
        Self {
            error,
            retry: Some(retry.into()),
        }
    }
}

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        PageError::new(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let (_, message) = self.error.parts();
        let page = ErrorPage {
            message,
            retry: self.retry,
            upload_new: true,
            go_home: true,
        };
        (status, Html(render_error_page(&page))).into_response()
    }
}
