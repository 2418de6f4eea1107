//! Configuration management for Shaban Server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::ocr::OcrEngine;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Backend order; the first available engine wins.
    pub engines: Vec<OcrEngine>,
    /// Base URL of a PaddleOCR serving instance.
    pub paddle_url: String,
    /// Tesseract language pack.
    pub tesseract_lang: String,
    /// Lines at or below this confidence are discarded before parsing.
    pub confidence_threshold: f64,
    /// Run the plate pre-processing pipeline before recognition.
    pub preprocess: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Characters accepted between the two serial digit groups.
    pub separators: Vec<char>,
    /// Optional newline-separated region list overriding the built-in catalog.
    pub region_catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            ocr: OcrConfig {
                engines: vec![OcrEngine::Paddle, OcrEngine::Tesseract],
                paddle_url: "http://localhost:8866".to_string(),
                tesseract_lang: "jpn".to_string(),
                confidence_threshold: 0.5,
                preprocess: true,
            },
            parser: ParserConfig {
                separators: vec!['-', '\u{2212}', '\u{30FC}'],
                region_catalog: None,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            ocr: OcrConfig {
                engines: env::var("OCR_ENGINES")
                    .ok()
                    .map(|s| parse_engines(&s))
                    .filter(|e| !e.is_empty())
                    .unwrap_or(defaults.ocr.engines),
                paddle_url: env::var("PADDLE_URL").unwrap_or(defaults.ocr.paddle_url),
                tesseract_lang: env::var("TESSERACT_LANG").unwrap_or(defaults.ocr.tesseract_lang),
                confidence_threshold: env::var("OCR_CONFIDENCE_THRESHOLD")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.ocr.confidence_threshold),
                preprocess: env::var("OCR_PREPROCESS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ocr.preprocess),
            },
            parser: ParserConfig {
                separators: env::var("PLATE_SEPARATORS")
                    .ok()
                    .map(|s| s.chars().collect())
                    .filter(|s: &Vec<char>| !s.is_empty())
                    .unwrap_or(defaults.parser.separators),
                region_catalog: env::var("REGION_CATALOG").ok().map(PathBuf::from),
            },
        }
    }
}

/// Parse a comma-separated engine list like "paddle,tesseract".
/// Unknown names are skipped.
fn parse_engines(s: &str) -> Vec<OcrEngine> {
    s.split(',')
        .filter_map(|name| match name.trim().to_lowercase().as_str() {
            "paddle" | "paddleocr" => Some(OcrEngine::Paddle),
            "tesseract" => Some(OcrEngine::Tesseract),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_engines() {
        assert_eq!(
            parse_engines("paddle,tesseract"),
            vec![OcrEngine::Paddle, OcrEngine::Tesseract]
        );
        assert_eq!(parse_engines("Tesseract"), vec![OcrEngine::Tesseract]);
        assert_eq!(parse_engines("paddleocr , bogus"), vec![OcrEngine::Paddle]);
        assert_eq!(parse_engines(""), vec![]);
    }

    #[test]
    fn test_default_separators() {
        let config = Config::default();
        assert_eq!(config.parser.separators, vec!['-', '−', 'ー']);
    }
}
