use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use precis_core::{Error, KeywordRequest, Keywords, Result, SummaryRequest, TextAnalyzer};
use tracing::debug;

use crate::keywords::KeywordExtractor;
use crate::nlp::{StopwordFilter, Tokenizer};
use crate::pagerank::StandardPageRank;
use crate::summarizer::Summarizer;
use crate::Config;

/// TextRank analyzer. Ranking is CPU-bound, so it runs on the blocking pool.
#[derive(Clone)]
pub struct TextRankAnalyzer {
    summarizer: Arc<Summarizer>,
    extractor: Arc<KeywordExtractor>,
}

impl TextRankAnalyzer {
    pub fn new(config: &Config) -> Self {
        let tokenizer = Tokenizer::new(StopwordFilter::new(&config.language));
        let pagerank = StandardPageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.threshold);

        Self {
            summarizer: Arc::new(Summarizer::new(tokenizer.clone()).with_pagerank(pagerank.clone())),
            extractor: Arc::new(KeywordExtractor::new(tokenizer).with_pagerank(pagerank)),
        }
    }
}

impl Default for TextRankAnalyzer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl fmt::Debug for TextRankAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRankAnalyzer").finish()
    }
}

#[async_trait]
impl TextAnalyzer for TextRankAnalyzer {
    fn name(&self) -> &str {
        "TextRank"
    }

    async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        debug!(chars = request.text.len(), ratio = request.ratio, "summarizing");
        let summarizer = Arc::clone(&self.summarizer);
        let request = request.clone();
        tokio::task::spawn_blocking(move || summarizer.summarize(&request))
            .await
            .map_err(|e| Error::Analysis(format!("summarization task failed: {}", e)))?
    }

    async fn extract_keywords(&self, request: &KeywordRequest) -> Result<Keywords> {
        debug!(chars = request.text.len(), ratio = request.ratio, "extracting keywords");
        let extractor = Arc::clone(&self.extractor);
        let request = request.clone();
        tokio::task::spawn_blocking(move || extractor.extract(&request))
            .await
            .map_err(|e| Error::Analysis(format!("keyword task failed: {}", e)))?
    }
}
