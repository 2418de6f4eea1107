//! Plate recognition route
//!
//! The one POST endpoint: base64 image in, structured plate record out.
//! Orchestrates decode, pre-processing, OCR, normalization and parsing;
//! every failure along the way becomes the wire failure envelope.

use axum::{extract::State, routing::post, Json, Router};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::ocr::{preprocess, OcrEngine};
use crate::plate::{normalize_lines, PlateRecord};
use crate::state::AppState;

/// Create the recognition router
pub fn router() -> Router<AppState> {
    Router::new().route("/ocr", post(recognize_plate))
}

/// Recognition request body
#[derive(Debug, Deserialize)]
pub struct OcrRequest {
    /// Base64-encoded image, optionally with a data-URI prefix
    #[serde(default)]
    pub image: Option<String>,
}

/// Recognition response
#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub success: bool,
    /// Normalized text recognized in the image
    pub detected_text: String,
    /// Structured plate fields parsed from the text
    pub plate_info: PlateRecord,
    /// Coarse engine-level confidence, 0-100
    pub confidence: u8,
    /// Engine that produced the text
    pub ocr_engine: OcrEngine,
}

/// Recognize a license plate in a base64-encoded image
///
/// POST /api/ocr  `{"image": "<base64>"}`
async fn recognize_plate(
    State(state): State<AppState>,
    Json(request): Json<OcrRequest>,
) -> Result<Json<OcrResponse>> {
    let payload = request
        .image
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingImage)?;

    let image_bytes = decode_image_payload(payload)?;
    let img = image::load_from_memory(&image_bytes)
        .map_err(|e| AppError::ImageDecode(e.to_string()))?;
    tracing::debug!(width = img.width(), height = img.height(), "image decoded");

    let prepared = if state.config().ocr.preprocess {
        preprocess::prepare_plate_image(&img)
    } else {
        img.to_luma8()
    };
    let png = encode_png(&prepared)?;

    let output = state.ocr().recognize(&png).await?;
    let detected_text = normalize_lines(&output.lines, state.config().ocr.confidence_threshold);
    tracing::debug!(engine = ?output.engine, text = %detected_text, "recognition finished");

    let plate_info = state.parser().parse(&detected_text);

    Ok(Json(OcrResponse {
        success: true,
        detected_text,
        plate_info,
        confidence: output.engine.nominal_confidence(),
        ocr_engine: output.engine,
    }))
}

/// Strip an optional data-URI prefix and base64-decode the payload
fn decode_image_payload(payload: &str) -> Result<Vec<u8>> {
    let encoded = if payload.starts_with("data:image") {
        payload
            .split_once(',')
            .map(|(_, rest)| rest)
            .ok_or_else(|| AppError::InvalidPayload("data URI without payload".to_string()))?
    } else {
        payload
    };

    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::InvalidPayload(e.to_string()))
}

/// PNG-encode the pre-processed image for the OCR boundary
fn encode_png(image: &image::GrayImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image
        .write_to(
            &mut std::io::Cursor::new(&mut buffer),
            image::ImageFormat::Png,
        )
        .map_err(|e| AppError::Internal(format!("Failed to encode image: {}", e)))?;
    Ok(buffer)
}
