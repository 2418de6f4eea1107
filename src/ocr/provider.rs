//! OCR Providers
//!
//! Defines the provider trait and implementations for the supported OCR
//! backends. Providers receive already pre-processed PNG bytes and return
//! per-line text with confidence; they never see the HTTP layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::{OcrEngine, OcrError, OcrLine};

/// OCR provider trait
#[async_trait]
pub trait OcrProviderTrait: Send + Sync {
    /// Get the engine backing this provider
    fn engine(&self) -> OcrEngine;

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Recognize text in a PNG-encoded image
    async fn recognize(&self, image_data: &[u8]) -> Result<Vec<OcrLine>, OcrError>;
}

/// PaddleOCR serving provider
///
/// Talks to a PaddleOCR `hubserving` instance over HTTP. The serving
/// process owns the model lifecycle; this side only ships base64 images.
pub struct PaddleProvider {
    /// Serving base URL
    base_url: String,
}

#[derive(Serialize)]
struct PaddleRequest<'a> {
    images: [&'a str; 1],
}

#[derive(Deserialize)]
struct PaddleResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    results: Vec<Vec<PaddleLineResult>>,
}

#[derive(Deserialize)]
struct PaddleLineResult {
    text: String,
    confidence: f64,
}

impl PaddleProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl OcrProviderTrait for PaddleProvider {
    fn engine(&self) -> OcrEngine {
        OcrEngine::Paddle
    }

    async fn is_available(&self) -> bool {
        // The serving root is not a health endpoint; any response at all
        // (including 404) means the process is reachable.
        let client = reqwest::Client::new();
        client.get(&self.base_url).send().await.is_ok()
    }

    async fn recognize(&self, image_data: &[u8]) -> Result<Vec<OcrLine>, OcrError> {
        use base64::Engine;

        let client = reqwest::Client::new();
        let url = format!("{}/predict/ocr_system", self.base_url);

        let image_base64 = base64::engine::general_purpose::STANDARD.encode(image_data);

        let response = client
            .post(&url)
            .json(&PaddleRequest {
                images: [image_base64.as_str()],
            })
            .send()
            .await
            .map_err(|e| OcrError::ApiError(format!("Failed to call PaddleOCR serving: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::ApiError(format!(
                "PaddleOCR serving returned {}: {}",
                status, body
            )));
        }

        let result: PaddleResponse = response
            .json()
            .await
            .map_err(|e| OcrError::ApiError(format!("Failed to parse response: {}", e)))?;

        if let Some(status) = result.status.as_deref() {
            if status != "000" {
                return Err(OcrError::ApiError(format!(
                    "PaddleOCR serving status {}",
                    status
                )));
            }
        }

        // One image in, one result list out.
        let lines = result
            .results
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(|line| OcrLine::new(line.text, line.confidence))
            .collect();

        Ok(lines)
    }
}

/// Tesseract OCR provider
///
/// Shells out to the `tesseract` binary with TSV output so per-word
/// confidences survive the round trip.
pub struct TesseractProvider {
    /// Language pack, e.g. "jpn"
    language: String,
}

impl TesseractProvider {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }
}

#[async_trait]
impl OcrProviderTrait for TesseractProvider {
    fn engine(&self) -> OcrEngine {
        OcrEngine::Tesseract
    }

    async fn is_available(&self) -> bool {
        std::process::Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    async fn recognize(&self, image_data: &[u8]) -> Result<Vec<OcrLine>, OcrError> {
        use std::process::Command;

        let temp_dir = std::env::temp_dir();
        let input_path = temp_dir.join(format!("ocr_input_{}.png", uuid::Uuid::new_v4()));
        let output_base = temp_dir.join(format!("ocr_output_{}", uuid::Uuid::new_v4()));

        std::fs::write(&input_path, image_data)
            .map_err(|e| OcrError::ProcessingError(format!("Failed to write temp file: {}", e)))?;

        // --psm 8: treat the image as a single word; plates are one line
        // of tightly grouped glyphs.
        let output = Command::new("tesseract")
            .arg(&input_path)
            .arg(&output_base)
            .arg("-l")
            .arg(&self.language)
            .arg("--oem")
            .arg("3")
            .arg("--psm")
            .arg("8")
            .arg("tsv")
            .output()
            .map_err(|e| OcrError::ProcessingError(format!("Failed to run tesseract: {}", e)));

        let _ = std::fs::remove_file(&input_path);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::ProcessingError(format!(
                "Tesseract failed: {}",
                stderr
            )));
        }

        let tsv_path = format!("{}.tsv", output_base.display());
        let tsv = std::fs::read_to_string(&tsv_path)
            .map_err(|e| OcrError::ProcessingError(format!("Failed to read output: {}", e)))?;

        let _ = std::fs::remove_file(&tsv_path);

        Ok(parse_tsv_output(&tsv))
    }
}

/// Parse Tesseract TSV output into per-word lines.
///
/// TSV fields: level, page_num, block_num, par_num, line_num, word_num,
/// left, top, width, height, conf, text. Level 5 rows are words; their
/// confidence is 0-100, negative for non-text rows.
fn parse_tsv_output(tsv: &str) -> Vec<OcrLine> {
    let mut lines = Vec::new();

    for row in tsv.lines().skip(1) {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() < 12 {
            continue;
        }

        let level: i32 = fields[0].parse().unwrap_or(-1);
        let conf: f64 = fields[10].parse().unwrap_or(-1.0);
        let text = fields[11].trim();

        if level != 5 || conf < 0.0 || text.is_empty() {
            continue;
        }

        lines.push(OcrLine::new(text, conf / 100.0));
    }

    lines
}

/// Mock provider for testing
#[cfg(test)]
pub struct MockProvider {
    pub engine: OcrEngine,
    pub lines: Vec<OcrLine>,
    pub available: bool,
}

#[cfg(test)]
#[async_trait]
impl OcrProviderTrait for MockProvider {
    fn engine(&self) -> OcrEngine {
        self.engine
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn recognize(&self, _image_data: &[u8]) -> Result<Vec<OcrLine>, OcrError> {
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_output() {
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
                   1\t1\t0\t0\t0\t0\t0\t0\t100\t30\t-1\t\n\
                   5\t1\t1\t1\t1\t1\t0\t0\t40\t30\t91.5\t品川\n\
                   5\t1\t1\t1\t1\t2\t45\t0\t30\t30\t88.0\t500\n\
                   5\t1\t1\t1\t1\t3\t80\t0\t20\t30\t-1\t \n";
        let lines = parse_tsv_output(tsv);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "品川");
        assert!((lines[0].confidence - 0.915).abs() < 1e-9);
        assert_eq!(lines[1].text, "500");
        assert!((lines[1].confidence - 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_parse_tsv_output_empty() {
        assert!(parse_tsv_output("").is_empty());
        assert!(parse_tsv_output("header only\n").is_empty());
    }
}
