//! Okapi BM25 similarity between the sentences of a document
//!
//! Every sentence is scored as a query against every other sentence. Terms
//! with a negative IDF (present in more than half of the sentences) get a
//! floor of `epsilon * average_idf` instead.

use rustc_hash::{FxHashMap, FxHashSet};

pub const K1: f64 = 1.5;
pub const B: f64 = 0.75;
pub const EPSILON: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct Bm25 {
    doc_freqs: Vec<FxHashMap<String, usize>>,
    doc_len: Vec<usize>,
    idf: FxHashMap<String, f64>,
    avgdl: f64,
}

impl Bm25 {
    pub fn new(corpus: &[Vec<String>]) -> Self {
        let mut doc_freqs = Vec::with_capacity(corpus.len());
        let mut doc_len = Vec::with_capacity(corpus.len());
        let mut docs_with_term: FxHashMap<&str, usize> = FxHashMap::default();
        let mut total_len = 0;

        for document in corpus {
            doc_len.push(document.len());
            total_len += document.len();

            let mut frequencies: FxHashMap<String, usize> = FxHashMap::default();
            for term in document {
                *frequencies.entry(term.clone()).or_insert(0) += 1;
            }
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for term in document {
                if seen.insert(term.as_str()) {
                    *docs_with_term.entry(term.as_str()).or_insert(0) += 1;
                }
            }
            doc_freqs.push(frequencies);
        }

        let corpus_size = corpus.len() as f64;
        let avgdl = if corpus.is_empty() {
            0.0
        } else {
            total_len as f64 / corpus_size
        };

        let mut idf: FxHashMap<String, f64> = docs_with_term
            .iter()
            .map(|(&term, &df)| {
                let df = df as f64;
                (term.to_string(), (corpus_size - df + 0.5).ln() - (df + 0.5).ln())
            })
            .collect();

        if !idf.is_empty() {
            let average_idf = idf.values().sum::<f64>() / idf.len() as f64;
            let floor = EPSILON * average_idf;
            for value in idf.values_mut() {
                if *value < 0.0 {
                    *value = floor;
                }
            }
        }

        Self {
            doc_freqs,
            doc_len,
            idf,
            avgdl,
        }
    }

    /// BM25 score of the document at `index` for the given query terms
    pub fn score(&self, query: &[String], index: usize) -> f64 {
        let Some(frequencies) = self.doc_freqs.get(index) else {
            return 0.0;
        };
        if self.avgdl <= 0.0 {
            return 0.0;
        }

        let length_norm = K1 * (1.0 - B + B * self.doc_len[index] as f64 / self.avgdl);
        query
            .iter()
            .filter_map(|term| {
                let tf = *frequencies.get(term)? as f64;
                let idf = self.idf.get(term).copied().unwrap_or(0.0);
                Some(idf * tf * (K1 + 1.0) / (tf + length_norm))
            })
            .sum()
    }

    /// Pairwise weights: `weights[i][j]` scores document `j` against query `i`
    pub fn weights(corpus: &[Vec<String>]) -> Vec<Vec<f64>> {
        let bm25 = Self::new(corpus);
        corpus
            .iter()
            .map(|query| (0..corpus.len()).map(|j| bm25.score(query, j)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_shared_rare_terms_score_higher() {
        let corpus = vec![
            doc(&["rust", "compiler", "borrow"]),
            doc(&["rust", "compiler", "speed"]),
            doc(&["garden", "flowers", "spring"]),
            doc(&["weather", "rain", "spring"]),
            doc(&["music", "guitar"]),
            doc(&["ocean", "waves"]),
        ];
        let weights = Bm25::weights(&corpus);

        assert!(weights[0][1] > 0.0);
        assert_eq!(weights[0][2], 0.0);
        // two shared terms outweigh one with the same document length
        assert!(weights[0][1] > weights[2][3]);
    }

    #[test]
    fn test_common_terms_get_idf_floor() {
        let corpus = vec![
            doc(&["common", "a1", "a2", "a3"]),
            doc(&["common", "b1", "b2", "b3"]),
            doc(&["common", "c1", "c2", "c3"]),
        ];
        let bm25 = Bm25::new(&corpus);

        // "common" is in every document so its raw IDF is negative
        assert!(bm25.idf["common"] > 0.0);
        assert!(bm25.idf["common"] < bm25.idf["a1"]);
        assert!(bm25.score(&doc(&["common"]), 1) > 0.0);
    }

    #[test]
    fn test_empty_corpus_and_documents() {
        assert!(Bm25::weights(&[]).is_empty());

        let corpus = vec![Vec::new(), Vec::new()];
        let weights = Bm25::weights(&corpus);
        assert_eq!(weights, vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
    }
}
