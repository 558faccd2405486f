//! Extractive summarization
//!
//! Sentences are nodes of an undirected graph weighted by BM25 similarity.
//! PageRank picks the most central ones, which are returned in document order.

pub mod bm25;

use precis_core::{validate_ratio, Error, Result, SummaryRequest};
use tracing::{debug, warn};

use crate::graph::{CsrGraph, GraphBuilder};
use crate::nlp::{Sentence, Tokenizer};
use crate::pagerank::StandardPageRank;
use bm25::Bm25;

/// Below this many sentences the ranking is unreliable
pub const INPUT_MIN_LENGTH: usize = 10;

/// Similarity under this value does not produce an edge
pub const WEIGHT_THRESHOLD: f64 = 1e-3;

/// PageRank needs this many connected sentences to say anything useful
pub const MIN_REACHABLE_SENTENCES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    tokenizer: Tokenizer,
    pagerank: StandardPageRank,
}

impl Summarizer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            pagerank: StandardPageRank::default(),
        }
    }

    pub fn with_pagerank(mut self, pagerank: StandardPageRank) -> Self {
        self.pagerank = pagerank;
        self
    }

    pub fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        let ratio = validate_ratio(request.ratio)?;
        let sentences = self.tokenizer.sentences(&request.text);

        match sentences.len() {
            0 => {
                warn!("Input text is empty");
                return Ok(String::new());
            }
            1 => return Err(Error::TooFewSentences),
            n if n < INPUT_MIN_LENGTH => {
                warn!("Input text is expected to have at least {} sentences, got {}", INPUT_MIN_LENGTH, n);
            }
            _ => {}
        }

        // A word budget is applied over the whole ranking
        let ratio = if request.word_count.is_some() { 1.0 } else { ratio };
        let ranked = self.rank_sentences(&sentences);
        if ranked.is_empty() {
            return Ok(String::new());
        }

        let keep = (sentences.len() as f64 * ratio) as usize;
        let important: Vec<&Sentence> = ranked.into_iter().take(keep).collect();
        if important.is_empty() {
            warn!("Couldn't get relevant sentences");
            return Ok(String::new());
        }

        let mut extracted = select_sentences(important, request.word_count);
        extracted.sort_by_key(|s| s.index);
        debug!(selected = extracted.len(), total = sentences.len(), "summary extracted");

        Ok(extracted
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Connected sentences ordered by descending centrality.
    ///
    /// Empty when fewer than [`MIN_REACHABLE_SENTENCES`] are connected.
    fn rank_sentences<'a>(&self, sentences: &'a [Sentence]) -> Vec<&'a Sentence> {
        let corpus: Vec<Vec<String>> = sentences.iter().map(|s| s.tokens.clone()).collect();
        let weights = Bm25::weights(&corpus);

        let mut builder = GraphBuilder::with_capacity(sentences.len());
        for sentence in sentences {
            builder.get_or_create_node(&sentence.index.to_string());
        }
        let mut connected = false;
        for (i, row) in weights.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if i != j && weight >= WEIGHT_THRESHOLD {
                    connected |= builder.add_edge_if_absent(i as u32, j as u32, weight);
                }
            }
        }
        if !connected {
            debug!("no similar sentences, ranking over a complete graph");
            for i in 0..sentences.len() as u32 {
                for j in (i + 1)..sentences.len() as u32 {
                    builder.add_edge_if_absent(i, j, 1.0);
                }
            }
        }

        // Sentence index of each node that survives the pruning, in node order
        let reachable: Vec<usize> = builder
            .nodes()
            .filter(|(_, node)| node.total_weight() > 0.0)
            .map(|(id, _)| id as usize)
            .collect();
        let builder = builder.without_isolated();
        if builder.node_count() < MIN_REACHABLE_SENTENCES {
            warn!(
                "Please add more sentences to the text. The number of reachable sentences is below {}",
                MIN_REACHABLE_SENTENCES
            );
            return Vec::new();
        }

        let graph = CsrGraph::from_builder(&builder);
        let result = self.pagerank.run(&graph);
        if !result.converged {
            warn!(
                "Sentence ranking did not converge after {} iterations (delta {})",
                result.iterations, result.delta
            );
        }

        result
            .ranked()
            .into_iter()
            .filter_map(|(node, _)| reachable.get(node as usize))
            .filter_map(|&index| sentences.get(index))
            .collect()
    }
}

/// Keep sentences in rank order, stopping at the word budget when one is given.
///
/// A sentence that overshoots the budget is kept only if it lands closer to it.
fn select_sentences(ranked: Vec<&Sentence>, word_count: Option<usize>) -> Vec<&Sentence> {
    let Some(limit) = word_count else {
        return ranked;
    };

    let mut length = 0usize;
    let mut extracted = Vec::new();
    for sentence in ranked {
        if length >= limit {
            break;
        }
        let words = sentence.word_count();
        if limit.abs_diff(length.saturating_add(words)) > limit - length {
            break;
        }
        extracted.push(sentence);
        length += words;
    }
    extracted
}
