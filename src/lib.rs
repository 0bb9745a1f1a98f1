//! Shortest path solvers
//!
//! Two independent, stateless engines over a weighted directed graph:
//!
//! - [`FloydWarshall`] computes all-pairs shortest paths on a dense
//!   [`WeightMatrix`], together with a predecessor matrix, and rejects graphs
//!   containing a negative-weight cycle.
//! - [`Dijkstra`] computes single-source shortest paths on a sparse
//!   [`AdjacencyMap`] with non-negative weights, using a binary heap with lazy
//!   deletion of stale entries.
//!
//! Missing edges and unreachable nodes are always represented by `None`, never
//! by a numeric sentinel, so summing two "infinite" values cannot overflow.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod models;

pub use algorithm::{
    dijkstra::Dijkstra, floyd_warshall::FloydWarshall, AllPairsAlgorithm, AllPairsResult,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{dense::WeightMatrix, sparse::AdjacencyMap};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Negative cycle detected through node {node}")]
    NegativeCycle { node: usize },

    #[error("Invalid edge weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
