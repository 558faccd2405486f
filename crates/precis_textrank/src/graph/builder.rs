//! Mutable graph builder
//!
//! Nodes are identified by a label and numbered in insertion order, which
//! keeps ranking ties deterministic.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct BuilderNode {
    pub label: String,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edges: FxHashMap::default(),
        }
    }

    /// Sum of the weights of all incident edges
    pub fn total_weight(&self) -> f64 {
        self.edges.values().sum()
    }
}

/// An undirected graph builder optimized for incremental construction
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    label_to_id: FxHashMap<String, u32>,
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given label, returning its ID
    pub fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.label_to_id.insert(label.to_string(), id);
        self.nodes.push(BuilderNode::new(label));
        id
    }

    /// Add `weight` to the edge between two nodes, creating it if needed
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Add an edge only if the two nodes are not connected yet.
    ///
    /// Returns whether the edge was added.
    pub fn add_edge_if_absent(&mut self, from: u32, to: u32, weight: f64) -> bool {
        if from == to || self.has_edge(from, to) {
            return false;
        }
        self.increment_edge(from, to, weight);
        true
    }

    pub fn has_edge(&self, from: u32, to: u32) -> bool {
        self.nodes
            .get(from as usize)
            .is_some_and(|node| node.edges.contains_key(&to))
    }

    /// Copy of the graph without the nodes whose incident weight is zero.
    ///
    /// Surviving nodes keep their relative order.
    pub fn without_isolated(&self) -> Self {
        let mut remap = vec![None; self.nodes.len()];
        let mut kept = Self::with_capacity(self.nodes.len());

        for (old_id, node) in self.nodes.iter().enumerate() {
            if node.total_weight() > 0.0 {
                remap[old_id] = Some(kept.get_or_create_node(&node.label));
            }
        }

        for (old_id, node) in self.nodes.iter().enumerate() {
            let Some(new_id) = remap[old_id] else { continue };
            for (&target, &weight) in &node.edges {
                if let Some(new_target) = remap[target as usize] {
                    if let Some(kept_node) = kept.nodes.get_mut(new_id as usize) {
                        kept_node.edges.insert(new_target, weight);
                    }
                }
            }
        }

        kept
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get_node_id(&self, label: &str) -> Option<u32> {
        self.label_to_id.get(label).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let again = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.get_node_id("b"), Some(b));
    }

    #[test]
    fn test_edges_are_undirected_and_accumulate() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");

        builder.increment_edge(a, b, 1.0);
        builder.increment_edge(b, a, 0.5);
        builder.increment_edge(a, a, 3.0);

        assert!(builder.has_edge(a, b));
        assert!(builder.has_edge(b, a));
        assert!(!builder.has_edge(a, a));
        let (_, node_a) = builder.nodes().next().unwrap();
        assert_eq!(node_a.edges[&b], 1.5);
    }

    #[test]
    fn test_add_edge_if_absent_keeps_first_weight() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");

        assert!(builder.add_edge_if_absent(a, b, 2.0));
        assert!(!builder.add_edge_if_absent(b, a, 7.0));
        let (_, node_b) = builder.nodes().nth(1).unwrap();
        assert_eq!(node_b.edges[&a], 2.0);
    }

    #[test]
    fn test_without_isolated() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        builder.get_or_create_node("lonely");
        let c = builder.get_or_create_node("c");
        builder.increment_edge(a, c, 1.0);

        let kept = builder.without_isolated();
        assert_eq!(kept.node_count(), 2);
        assert_eq!(kept.get_node_id("lonely"), None);
        assert_eq!(kept.get_node_id("a"), Some(0));
        assert_eq!(kept.get_node_id("c"), Some(1));
        assert!(kept.has_edge(0, 1));
    }
}
