pub mod analyzer;
pub mod error;
pub mod types;

pub use analyzer::TextAnalyzer;
pub use error::{Error, Result};
pub use types::{
    validate_ratio, KeywordRequest, Keywords, ScoredKeyword, SummaryRequest,
    DEFAULT_KEYWORD_RATIO, DEFAULT_SUMMARY_RATIO,
};
