//! Floyd–Warshall - All-Pairs Shortest Paths with Route Reconstruction
//!
//! This library computes the shortest distance between every ordered pair of
//! nodes in a weighted directed graph, together with a next-hop matrix that
//! rebuilds any shortest route in time proportional to its length.
//!
//! Missing edges and unreachable pairs are represented by the tagged
//! [`Distance::Unreachable`] value rather than a floating-point infinity, so
//! relaxation never sums two absent legs.

pub mod algorithm;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, floyd_warshall::FloydWarshall, AllPairsResult, AllPairsShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyMatrix, Distance, GraphBuilder, LabeledGraph, Matrix, NodeLabels, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid matrix shape: {0}")]
    InvalidShape(String),

    #[error("Non-zero diagonal entry at node {index}")]
    InvalidDiagonal { index: usize },

    #[error("Weight from {from} to {to} is not comparable")]
    InvalidWeight { from: usize, to: usize },

    #[error("Node index {index} out of range for graph of {size} nodes")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Route from {from} to {to} exceeded {steps} hops; next-hop matrix is inconsistent")]
    InternalInconsistency { from: usize, to: usize, steps: usize },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Duplicate edge: from {0} to {1}")]
    DuplicateEdge(String, String),

    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    #[error("Negative edge weight from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
