use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Fraction of sentences kept by a summary when no word budget is given.
pub const DEFAULT_SUMMARY_RATIO: f64 = 0.2;

/// Fraction of the distinct lexical units treated as keyword-bearing.
pub const DEFAULT_KEYWORD_RATIO: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
    pub ratio: f64,
    /// Approximate number of words in the summary. Overrides `ratio`.
    pub word_count: Option<usize>,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ratio: DEFAULT_SUMMARY_RATIO,
            word_count: None,
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_word_count(mut self, word_count: Option<usize>) -> Self {
        self.word_count = word_count;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRequest {
    pub text: String,
    pub ratio: f64,
    /// Exact number of lemmas to keep. Overrides `ratio`.
    pub words: Option<usize>,
    /// Return `[keyword, score]` pairs instead of bare keywords.
    pub scores: bool,
}

impl KeywordRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ratio: DEFAULT_KEYWORD_RATIO,
            words: None,
            scores: false,
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_words(mut self, words: Option<usize>) -> Self {
        self.words = words;
        self
    }

    pub fn with_scores(mut self, scores: bool) -> Self {
        self.scores = scores;
        self
    }
}

/// A keyword with its relevance score. Serializes as a `[keyword, score]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword(pub String, pub f64);

impl ScoredKeyword {
    pub fn keyword(&self) -> &str {
        &self.0
    }

    pub fn score(&self) -> f64 {
        self.1
    }
}

/// Ranked keywords, most relevant first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    Plain(Vec<String>),
    Scored(Vec<ScoredKeyword>),
}

impl Keywords {
    pub fn len(&self) -> usize {
        match self {
            Keywords::Plain(words) => words.len(),
            Keywords::Scored(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The keywords without their scores, in rank order.
    pub fn words(&self) -> Vec<&str> {
        match self {
            Keywords::Plain(words) => words.iter().map(String::as_str).collect(),
            Keywords::Scored(words) => words.iter().map(ScoredKeyword::keyword).collect(),
        }
    }
}

pub fn validate_ratio(ratio: f64) -> Result<f64> {
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(ratio)
    } else {
        Err(Error::InvalidRatio(ratio))
    }
}
