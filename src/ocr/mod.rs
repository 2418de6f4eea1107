//! OCR Module
//!
//! Everything on the far side of the recognition boundary: the provider
//! trait, the PaddleOCR serving and Tesseract backends, the dispatching
//! service, and the image pre-processing that feeds them. Output is a
//! list of (text, confidence) lines; interpretation of that text belongs
//! to the `plate` module.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shaban_server::ocr::{OcrService, OcrEngine};
//!
//! let service = OcrService::from_config(&config.ocr);
//! let output = service.recognize(&png_bytes).await?;
//! ```

pub mod preprocess;
mod provider;
mod service;
mod types;

pub use provider::{OcrProviderTrait, PaddleProvider, TesseractProvider};
pub use service::OcrService;
pub use types::{OcrEngine, OcrError, OcrLine, OcrOutput};
