//! Failures signalled by [`AdjacencyList`](crate::graph::AdjacencyList).
//!
//! The node-based graph never fails; only the adjacency list enforces
//! uniqueness and membership, and it reports violations through this type.
//! A rejected duplicate *edge* is not an error and is reported as `Ok(false)`.

use thiserror::Error;

use crate::id::ListId;

/// Result alias used across the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

/// Errors raised by adjacency-list mutations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex with a matching value is already in the graph.
    #[error("vertex is already in the graph as {existing}; duplicate not added")]
    DuplicateVertex {
        /// The list that already holds the value.
        existing: ListId,
    },

    /// The handle does not name a vertex list of this graph.
    #[error("vertex {0} does not exist in this graph")]
    UnknownVertex(ListId),
}
