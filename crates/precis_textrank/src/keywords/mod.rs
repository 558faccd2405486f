//! Keyword extraction
//!
//! Candidate words become nodes of a co-occurrence graph; words adjacent in
//! the text share an edge. Stopwords stay in the word sequence, so they break
//! adjacency without becoming nodes. The best ranked words are then merged
//! back into the multi-word phrases they form in the text.

use precis_core::{validate_ratio, KeywordRequest, Keywords, Result, ScoredKeyword};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::graph::{CsrGraph, GraphBuilder};
use crate::nlp::Tokenizer;
use crate::pagerank::StandardPageRank;

/// Words at most this far apart are connected
pub const WINDOW_SIZE: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    pagerank: StandardPageRank,
}

impl KeywordExtractor {
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

    pub fn extract(&self, request: &KeywordRequest) -> Result<Keywords> {
        let ratio = validate_ratio(request.ratio)?;
        let words = self.tokenizer.words(&request.text);

        let graph = CsrGraph::from_builder(&self.build_graph(&words));
        if graph.is_empty() {
            debug!("no connected candidate words");
            return Ok(empty(request.scores));
        }

        let result = self.pagerank.run(&graph);
        if !result.converged {
            warn!(
                "Keyword ranking did not converge after {} iterations (delta {})",
                result.iterations, result.delta
            );
        }
        let keep = request
            .words
            .unwrap_or_else(|| ((graph.num_nodes as f64 * ratio) as usize).max(1))
            .min(graph.num_nodes);

        let scores: FxHashMap<&str, f64> = rank_nodes(&graph, &result.scores, &words)
            .into_iter()
            .take(keep)
            .filter_map(|(node, score)| Some((graph.label(node)?, score)))
            .collect();

        let mut phrases: Vec<(String, f64)> = combine_phrases(&scores, &words)
            .into_iter()
            .map(|phrase| {
                let score = average_score(&phrase, &scores);
                (phrase, score)
            })
            .collect();
        phrases.sort_by(|a, b| b.1.total_cmp(&a.1));
        debug!(nodes = graph.num_nodes, kept = keep, phrases = phrases.len(), "keywords extracted");

        Ok(if request.scores {
            Keywords::Scored(
                phrases
                    .into_iter()
                    .map(|(phrase, score)| ScoredKeyword(phrase, score))
                    .collect(),
            )
        } else {
            Keywords::Plain(phrases.into_iter().map(|(phrase, _)| phrase).collect())
        })
    }

    /// Co-occurrence graph over the candidate words, isolated words dropped
    fn build_graph(&self, words: &[String]) -> GraphBuilder {
        let mut builder = GraphBuilder::new();
        for word in words.iter().filter(|w| self.tokenizer.is_candidate(w)) {
            builder.get_or_create_node(word);
        }

        for window in words.windows(WINDOW_SIZE) {
            let first = &window[0];
            for other in &window[1..] {
                if let (Some(a), Some(b)) = (builder.get_node_id(first), builder.get_node_id(other)) {
                    builder.add_edge_if_absent(a, b, 1.0);
                }
            }
        }

        builder.without_isolated()
    }
}

/// Nodes by descending score. Equal scores go to the more frequent word, then
/// to the earlier one.
fn rank_nodes(graph: &CsrGraph, scores: &[f64], words: &[String]) -> Vec<(u32, f64)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    let count = |node: u32| {
        graph
            .label(node)
            .and_then(|label| counts.get(label).copied())
            .unwrap_or(0)
    };

    let mut ranked: Vec<(u32, f64)> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| (i as u32, score))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| count(b.0).cmp(&count(a.0)))
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked
}

fn empty(scores: bool) -> Keywords {
    if scores {
        Keywords::Scored(Vec::new())
    } else {
        Keywords::Plain(Vec::new())
    }
}

/// Merge keywords that follow each other in the text into phrases.
///
/// Each keyword is used by at most one phrase, the one of its first
/// occurrence, and a phrase never repeats a word.
fn combine_phrases(keywords: &FxHashMap<&str, f64>, words: &[String]) -> Vec<String> {
    let mut remaining: FxHashSet<&str> = keywords.keys().copied().collect();
    let mut phrases = Vec::new();
    let mut i = 0;

    while i < words.len() {
        if !remaining.contains(words[i].as_str()) {
            i += 1;
            continue;
        }

        let mut phrase = vec![words[i].as_str()];
        let mut j = i + 1;
        while j < words.len()
            && remaining.contains(words[j].as_str())
            && !phrase.contains(&words[j].as_str())
        {
            phrase.push(words[j].as_str());
            j += 1;
        }

        for word in &phrase {
            remaining.remove(word);
        }
        phrases.push(phrase.join(" "));
        i = j;
    }

    phrases
}

fn average_score(phrase: &str, scores: &FxHashMap<&str, f64>) -> f64 {
    let parts: Vec<f64> = phrase
        .split(' ')
        .map(|word| scores.get(word).copied().unwrap_or(0.0))
        .collect();
    if parts.is_empty() {
        0.0
    } else {
        parts.iter().sum::<f64>() / parts.len() as f64
    }
}
