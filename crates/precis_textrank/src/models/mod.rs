use std::sync::Arc;
use precis_core::{Error, Result, TextAnalyzer};

use crate::Config;

pub mod dummy;
pub mod textrank;

pub use dummy::DummyAnalyzer;
pub use textrank::TextRankAnalyzer;

/// Build the analyzer named by the config (`textrank` by default).
pub fn create_analyzer(config: Option<Config>) -> Result<Arc<dyn TextAnalyzer>> {
    let config = config.unwrap_or_default();
    let name = config.model_name.as_deref().unwrap_or("textrank");

    match name.to_lowercase().as_str() {
        "textrank" => Ok(Arc::new(TextRankAnalyzer::new(&config))),
        "dummy" => Ok(Arc::new(DummyAnalyzer::new())),
        other => Err(Error::Analysis(format!("Unknown analyzer: {}", other))),
    }
}
