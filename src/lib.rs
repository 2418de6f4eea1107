//! Shaban Server Library
//!
//! Recognizes Japanese vehicle license plates: a POST endpoint accepts a
//! base64-encoded plate photo, an OCR backend turns it into text, and the
//! plate parser reconstructs the five printed segments (region name,
//! classification number, hiragana, serial number) from that text.
//!
//! # Modules
//!
//! - `plate`: the parsing core - normalizer, region catalog, tiered parser
//! - `ocr`: swappable OCR backends (PaddleOCR serving, Tesseract) and the
//!   image pre-processing pipeline that feeds them
//! - `routes`: the HTTP surface

pub mod config;
pub mod error;
pub mod ocr;
pub mod plate;
pub mod routes;
pub mod state;
