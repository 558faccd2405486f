//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores edges contiguously, which is what PageRank's power iteration
//! wants when it walks every neighbor list on each pass.

use super::builder::GraphBuilder;

#[derive(Debug, Clone, Default)]
pub struct CsrGraph {
    pub num_nodes: usize,
    /// Node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    pub col_idx: Vec<u32>,
    pub weights: Vec<f64>,
    pub total_weight: Vec<f64>,
    pub labels: Vec<String>,
}

impl CsrGraph {
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut labels = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            labels.push(node.label.clone());

            // Sorted for deterministic floating point accumulation
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            labels,
        }
    }

    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Nodes without outgoing weight
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.node_total_weight(n) <= 0.0)
            .collect()
    }

    pub fn label(&self, node: u32) -> Option<&str> {
        self.labels.get(node as usize).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}
