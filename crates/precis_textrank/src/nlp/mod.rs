//! Text normalization
//!
//! Sentence splitting, word tokenization and stopword filtering shared by the
//! summarizer and the keyword extractor.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::{Sentence, Tokenizer};
