use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use precis_core::{
    KeywordRequest, Keywords, SummaryRequest, DEFAULT_KEYWORD_RATIO, DEFAULT_SUMMARY_RATIO,
};
use serde::Deserialize;
use tracing::info;

use crate::{ApiError, AppState};

pub const USAGE: &str =
    "Hello, World! Try the endpoints /summary?text=yourtext or /keywords?text=yourtext";

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub text: Option<String>,
    pub ratio: Option<f64>,
    pub word_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    pub text: Option<String>,
    pub ratio: Option<f64>,
    pub words: Option<usize>,
    #[serde(default)]
    pub scores: bool,
}

pub async fn index() -> &'static str {
    USAGE
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<String>, ApiError> {
    let text = required_text(params.text)?;
    let request = SummaryRequest::new(text)
        .with_ratio(params.ratio.unwrap_or(DEFAULT_SUMMARY_RATIO))
        .with_word_count(params.word_count);

    info!("📝 Summarizing {} chars with {}", request.text.len(), state.analyzer.name());
    let summary = state.analyzer.summarize(&request).await?;
    Ok(Json(summary))
}

pub async fn get_keywords(
    State(state): State<Arc<AppState>>,
    Query(params): Query<KeywordParams>,
) -> Result<Json<Keywords>, ApiError> {
    let text = required_text(params.text)?;
    let request = KeywordRequest::new(text)
        .with_ratio(params.ratio.unwrap_or(DEFAULT_KEYWORD_RATIO))
        .with_words(params.words)
        .with_scores(params.scores);

    info!("🔑 Extracting keywords from {} chars with {}", request.text.len(), state.analyzer.name());
    let keywords = state.analyzer.extract_keywords(&request).await?;
    Ok(Json(keywords))
}

fn required_text(text: Option<String>) -> Result<String, ApiError> {
    text.filter(|t| !t.is_empty()).ok_or(ApiError::MissingText)
}
