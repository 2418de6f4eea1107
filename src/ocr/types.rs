//! OCR Types
//!
//! Defines types crossing the OCR engine boundary. The rest of the crate
//! only ever sees recognized lines; pixels stay on the provider side.

use serde::{Deserialize, Serialize};

/// OCR engine backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrEngine {
    /// PaddleOCR serving instance (HTTP)
    Paddle,
    /// Tesseract OCR (local binary)
    Tesseract,
}

impl Default for OcrEngine {
    fn default() -> Self {
        Self::Paddle
    }
}

impl OcrEngine {
    /// Coarse confidence constant reported to API callers for results
    /// produced by this engine. Business rule, not a measured value.
    pub fn nominal_confidence(&self) -> u8 {
        match self {
            Self::Paddle => 95,
            Self::Tesseract => 75,
        }
    }
}

/// Single recognized line with its confidence in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct OcrLine {
    pub text: String,
    pub confidence: f64,
}

impl OcrLine {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Full output of one recognition pass
#[derive(Debug, Clone)]
pub struct OcrOutput {
    /// Recognized lines, in engine order
    pub lines: Vec<OcrLine>,
    /// Engine that produced them
    pub engine: OcrEngine,
}

/// OCR error types
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR engine not available: {0}")]
    EngineNotAvailable(String),

    #[error("OCR processing failed: {0}")]
    ProcessingError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl OcrError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::EngineNotAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
