use std::sync::Arc;
use precis_core::TextAnalyzer;
use precis_textrank::TextRankAnalyzer;

use crate::ServerConfig;

pub struct AppState {
    pub analyzer: Arc<dyn TextAnalyzer>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, config: ServerConfig) -> Self {
        Self { analyzer, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(TextRankAnalyzer::default()), ServerConfig::default())
    }
}
