//! Sentence and word tokenization
//!
//! Sentences follow Unicode sentence boundaries (UAX #29), so line breaks end a
//! sentence as well as terminal punctuation. Words follow Unicode word
//! boundaries and are lowercased.

use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordFilter;

/// Words shorter than this never become graph candidates
pub const MIN_WORD_LENGTH: usize = 3;

/// A sentence of the input with its candidate terms
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the document
    pub index: usize,
    /// Original text, trimmed
    pub text: String,
    /// Normalized, stopword-free terms
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Number of whitespace-separated words in the original text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Split text into sentences, dropping blank ones
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(index, s)| Sentence {
                index,
                text: s.to_string(),
                tokens: self.words(s).into_iter().filter(|w| self.is_candidate(w)).collect(),
            })
            .collect()
    }

    /// All words of the text in order, lowercased, stopwords included
    pub fn words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_lowercase).collect()
    }

    /// Whether a lowercased word may become a node of a ranking graph
    pub fn is_candidate(&self, word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LENGTH
            && word.chars().all(char::is_alphabetic)
            && !self.stopwords.is_stopword(word)
    }
}
