pub mod graph;
pub mod keywords;
pub mod models;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;

#[derive(Debug, Clone)]
pub struct Config {
    /// Analyzer implementation, `textrank` when unset
    pub model_name: Option<String>,
    /// Stopword language
    pub language: String,
    pub damping: f64,
    pub max_iterations: usize,
    /// PageRank convergence threshold (L1 delta)
    pub threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: None,
            language: "en".to_string(),
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::{create_analyzer, DummyAnalyzer, TextRankAnalyzer};
    pub use precis_core::{Error, KeywordRequest, Keywords, Result, SummaryRequest, TextAnalyzer};
}

pub use models::{create_analyzer, DummyAnalyzer, TextRankAnalyzer};
