//! Identity handles for vertices and adjacency lists.
//!
//! Both graph representations compare vertices by *identity* for edge
//! membership and by *value* for searches. Identity is carried by the small
//! `Copy` handles defined here, so a vertex never has to be compared through
//! its payload to decide whether it is "the same vertex".
//!
//! Tags are drawn from one process-wide counter. Two handles minted by
//! different graphs (or by standalone vertices) can therefore never collide.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Returns a fresh, process-unique tag. Never returns zero.
#[inline]
pub(crate) fn fresh_tag() -> u64 {
    NEXT_TAG.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a [`VertexNode`](crate::graph::VertexNode).
///
/// Assigned when the vertex is constructed and never reused, so it plays the
/// role of a reference: two vertices holding equal values are still distinct
/// vertices unless their ids match.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    #[inline]
    pub(crate) fn fresh() -> Self {
        Self(fresh_tag())
    }

    /// Returns the raw tag.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Handle to one vertex list of an [`AdjacencyList`](crate::graph::AdjacencyList).
///
/// Carries the tag of the graph that issued it alongside the list position, so
/// a handle from one graph is rejected by every other graph even when the
/// positions happen to line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId {
    graph: u64,
    index: usize,
}

impl ListId {
    #[inline]
    pub(crate) fn new(graph: u64, index: usize) -> Self {
        Self { graph, index }
    }

    #[inline]
    pub(crate) fn graph(self) -> u64 {
        self.graph
    }

    /// Position of the list inside its graph, in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@g{}", self.index, self.graph)
    }
}
