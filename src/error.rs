//! Error types for the Shaban server
//!
//! Failures anywhere in the request pipeline are translated into the
//! wire failure envelope: `success: false`, an error message, empty
//! `detected_text`, zero confidence. Nothing propagates to the caller as
//! an unhandled fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::ocr::OcrError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No image data provided")]
    MissingImage,

    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure envelope returned for every error response
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    detected_text: String,
    confidence: u8,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingImage => StatusCode::BAD_REQUEST,
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::ImageDecode(_) => StatusCode::BAD_REQUEST,
            AppError::Ocr(e) => e.status_code(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            success: false,
            error: self.to_string(),
            detected_text: String::new(),
            confidence: 0,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingImage.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Ocr(OcrError::EngineNotAvailable("none".into()))
                .into_response()
                .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
