//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::ocr::OcrService;
use crate::plate::{PlateParser, RegionCatalog};

/// Error type for state initialization
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to load region catalog: {0}")]
    Catalog(#[from] std::io::Error),

    #[error("Failed to compile plate patterns: {0}")]
    Pattern(#[from] regex::Error),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub config: Config,
    pub ocr: OcrService,
    pub parser: PlateParser,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the region catalog (from file if configured) and compiles the
    /// parser once; both are shared read-only across requests.
    pub fn new(config: Config, ocr: OcrService) -> Result<Self, StateError> {
        let catalog = match &config.parser.region_catalog {
            Some(path) => RegionCatalog::from_file(path)?,
            None => RegionCatalog::default(),
        };
        tracing::info!("Region catalog loaded with {} entries", catalog.len());

        let parser = PlateParser::new(catalog, &config.parser.separators)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                ocr,
                parser,
            }),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the OCR service
    pub fn ocr(&self) -> &OcrService {
        &self.inner.ocr
    }

    /// Get the plate parser
    pub fn parser(&self) -> &PlateParser {
        &self.inner.parser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builds_with_defaults() {
        let config = Config::default();
        let ocr = OcrService::with_providers(Vec::new());
        let state = AppState::new(config, ocr).unwrap();

        assert_eq!(state.parser().parse("品川 500 あ 12-34").region, "品川");
    }

    #[test]
    fn test_state_fails_on_missing_catalog_file() {
        let mut config = Config::default();
        config.parser.region_catalog = Some("/nonexistent/regions.txt".into());

        let result = AppState::new(config, OcrService::with_providers(Vec::new()));
        assert!(matches!(result, Err(StateError::Catalog(_))));
    }
}
