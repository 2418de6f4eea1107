//! OCR Service
//!
//! Owns the configured providers and picks which one handles a request.
//! Constructed once at startup and injected through `AppState`; the
//! parsing core never talks to this service.

use std::sync::Arc;

use crate::config::OcrConfig;

use super::provider::{OcrProviderTrait, PaddleProvider, TesseractProvider};
use super::types::{OcrEngine, OcrError, OcrOutput};

/// OCR service dispatching to the configured backends
pub struct OcrService {
    providers: Vec<Arc<dyn OcrProviderTrait>>,
}

impl OcrService {
    /// Build providers in the configured order
    pub fn from_config(config: &OcrConfig) -> Self {
        let providers = config
            .engines
            .iter()
            .map(|engine| -> Arc<dyn OcrProviderTrait> {
                match engine {
                    OcrEngine::Paddle => Arc::new(PaddleProvider::new(&config.paddle_url)),
                    OcrEngine::Tesseract => {
                        Arc::new(TesseractProvider::new(&config.tesseract_lang))
                    }
                }
            })
            .collect();

        Self { providers }
    }

    /// Create a service from explicit providers (tests, custom backends)
    pub fn with_providers(providers: Vec<Arc<dyn OcrProviderTrait>>) -> Self {
        Self { providers }
    }

    /// Per-engine availability, in configured order
    pub async fn availability(&self) -> Vec<(OcrEngine, bool)> {
        let mut status = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            status.push((provider.engine(), provider.is_available().await));
        }
        status
    }

    /// Recognize text in a PNG-encoded image.
    ///
    /// Tries providers in configured order, skipping unavailable ones and
    /// falling through on failure.
    pub async fn recognize(&self, image_data: &[u8]) -> Result<OcrOutput, OcrError> {
        for provider in &self.providers {
            if !provider.is_available().await {
                continue;
            }

            match provider.recognize(image_data).await {
                Ok(lines) => {
                    return Ok(OcrOutput {
                        lines,
                        engine: provider.engine(),
                    })
                }
                Err(e) => {
                    tracing::warn!(
                        "OCR engine {:?} failed: {}, trying next",
                        provider.engine(),
                        e
                    );
                    continue;
                }
            }
        }

        Err(OcrError::EngineNotAvailable(
            "No OCR engines available".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::provider::MockProvider;
    use crate::ocr::types::OcrLine;

    fn mock(engine: OcrEngine, available: bool, lines: Vec<OcrLine>) -> Arc<dyn OcrProviderTrait> {
        Arc::new(MockProvider {
            engine,
            lines,
            available,
        })
    }

    #[tokio::test]
    async fn test_from_config_builds_configured_engines() {
        let config = crate::config::Config::default();
        let service = OcrService::from_config(&config.ocr);
        assert_eq!(service.providers.len(), 2);
        assert_eq!(service.providers[0].engine(), OcrEngine::Paddle);
        assert_eq!(service.providers[1].engine(), OcrEngine::Tesseract);
    }

    #[tokio::test]
    async fn test_recognize_skips_unavailable_provider() {
        let service = OcrService::with_providers(vec![
            mock(OcrEngine::Paddle, false, vec![OcrLine::new("ignored", 0.9)]),
            mock(
                OcrEngine::Tesseract,
                true,
                vec![OcrLine::new("品川", 0.9)],
            ),
        ]);

        let output = service.recognize(b"png").await.unwrap();
        assert_eq!(output.engine, OcrEngine::Tesseract);
        assert_eq!(output.lines[0].text, "品川");
    }

    #[tokio::test]
    async fn test_recognize_fails_without_providers() {
        let service = OcrService::with_providers(Vec::new());
        let result = service.recognize(b"png").await;
        assert!(matches!(result, Err(OcrError::EngineNotAvailable(_))));
    }

    #[tokio::test]
    async fn test_availability_reports_each_engine() {
        let service = OcrService::with_providers(vec![
            mock(OcrEngine::Paddle, false, Vec::new()),
            mock(OcrEngine::Tesseract, true, Vec::new()),
        ]);

        let status = service.availability().await;
        assert_eq!(
            status,
            vec![(OcrEngine::Paddle, false), (OcrEngine::Tesseract, true)]
        );
    }
}
