//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::ocr::OcrEngine;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engines: Vec<EngineStatus>,
}

#[derive(Serialize)]
pub struct EngineStatus {
    pub engine: OcrEngine,
    pub available: bool,
}

/// Report service liveness and per-engine OCR availability
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let engines = state
        .ocr()
        .availability()
        .await
        .into_iter()
        .map(|(engine, available)| EngineStatus { engine, available })
        .collect();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        engines,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
