//! Vertices of the node-based graph.
//!
//! A [`VertexNode`] owns its value and an ordered list of the *identities* of
//! its neighbours. Edges are therefore compared by identity: two distinct
//! vertices holding equal values are still two different edge targets.

use serde::{Deserialize, Serialize};

use crate::id::VertexId;

/// A graph vertex: a value plus outgoing adjacency.
///
/// Vertices can be built and wired together before being handed to a
/// [`NodeGraph`](super::NodeGraph); the graph only takes ownership.
///
/// Every operation is total. Missing targets and self-edges are ignored
/// rather than reported.
#[derive(Debug)]
pub struct VertexNode<T> {
    id: VertexId,
    value: T,
    /// Neighbour ids in insertion order. Duplicates allowed, never `id`.
    adjacent: Vec<VertexId>,
}

impl<T> VertexNode<T> {
    /// Creates a standalone vertex with no edges.
    pub fn new(value: T) -> Self {
        Self {
            id: VertexId::fresh(),
            value,
            adjacent: Vec::new(),
        }
    }

    /// Identity of this vertex.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the stored value mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the stored value.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Consumes the vertex and returns its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Neighbour ids in insertion order.
    #[inline]
    pub fn adjacent(&self) -> &[VertexId] {
        &self.adjacent
    }

    /// Number of outgoing edges, counting duplicates.
    #[inline]
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Appends an edge to `other`.
    ///
    /// Returns `false`, leaving the vertex untouched, if `other` is this
    /// vertex. Parallel edges are allowed.
    pub fn add_edge(&mut self, other: VertexId) -> bool {
        if other == self.id {
            graph_debug!(vertex = %self.id, "self-edge rejected");
            return false;
        }
        self.adjacent.push(other);
        graph_trace!(from = %self.id, to = %other, "edge added");
        true
    }

    /// Removes the first edge to `other`, if any.
    pub fn remove_edge(&mut self, other: VertexId) -> bool {
        match self.adjacent.iter().position(|&id| id == other) {
            Some(pos) => {
                self.adjacent.remove(pos);
                graph_trace!(from = %self.id, to = %other, "edge removed");
                true
            }
            None => false,
        }
    }

    /// Checks whether an edge to `other` exists.
    #[inline]
    pub fn is_connected_to(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }
}

impl<T: Default> Default for VertexNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A directed edge between two vertices, named by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    start: VertexId,
    end: VertexId,
}

impl Edge {
    /// Creates the edge `start -> end`.
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }

    /// Source vertex.
    #[inline]
    pub fn start(self) -> VertexId {
        self.start
    }

    /// Target vertex.
    #[inline]
    pub fn end(self) -> VertexId {
        self.end
    }

    /// Returns `end -> start`.
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((start, end): (VertexId, VertexId)) -> Self {
        Self::new(start, end)
    }
}
