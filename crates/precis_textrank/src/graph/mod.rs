//! Graph construction and representation
//!
//! Both rankers build an undirected weighted graph with a [`GraphBuilder`]
//! and hand a frozen [`CsrGraph`] to PageRank.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::CsrGraph;
