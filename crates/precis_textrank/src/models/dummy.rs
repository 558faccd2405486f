use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use precis_core::{Error, KeywordRequest, Keywords, Result, SummaryRequest, TextAnalyzer};

/// Deterministic stand-in that counts how often it is called.
#[derive(Default)]
pub struct DummyAnalyzer {
    calls: AtomicUsize,
}

impl fmt::Debug for DummyAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyAnalyzer")
            .field("calls", &self.calls())
            .finish()
    }
}

impl DummyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of summarize and extract_keywords invocations so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextAnalyzer for DummyAnalyzer {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // First sentence, or an error when there is nothing after it
        match request.text.split_once(". ") {
            Some((first, _)) => Ok(format!("{}.", first)),
            None => Err(Error::TooFewSentences),
        }
    }

    async fn extract_keywords(&self, request: &KeywordRequest) -> Result<Keywords> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Longest words first
        let mut words: Vec<String> = request
            .text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();
        words.truncate(request.words.unwrap_or(3));
        Ok(Keywords::Plain(words))
    }
}
