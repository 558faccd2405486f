use std::fmt;
use async_trait::async_trait;
use crate::types::{KeywordRequest, Keywords, SummaryRequest};
use crate::Result;

#[async_trait]
pub trait TextAnalyzer: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Produce an extractive summary of the request text
    async fn summarize(&self, request: &SummaryRequest) -> Result<String>;

    /// Rank the salient phrases of the request text
    async fn extract_keywords(&self, request: &KeywordRequest) -> Result<Keywords>;
}
