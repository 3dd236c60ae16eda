//! A value-keyed adjacency-list graph.
//!
//! Each vertex is one list: its head is the vertex value, its tail names the
//! adjacent vertices *by value*. Heads are unique under the graph's matcher,
//! which is what lets a value stand in for a vertex. Edges are directed; the
//! reverse edge is a separate entry in the target's list.
//!
//! Unlike [`NodeGraph`](super::NodeGraph), this representation enforces its
//! invariants and reports violations through [`GraphError`].
//!
//! # Edge counting
//! [`number_of_edges_in`](AdjacencyList::number_of_edges_in) and
//! [`number_of_edges`](AdjacencyList::number_of_edges) keep an established
//! counting convention: a vertex's count includes its own head, and the
//! graph-wide count starts at one. [`out_degree`](AdjacencyList::out_degree)
//! and [`edge_count`](AdjacencyList::edge_count) report the plain numbers.

use core::fmt;
use core::marker::PhantomData;

use crate::error::{GraphError, Result};
use crate::id::{fresh_tag, ListId};
use crate::matching::{ByEquality, ByOrdering, ValueMatcher};

/// One vertex: its value and the values of its neighbours.
#[derive(Debug, Clone)]
struct VertexEntry<T> {
    head: T,
    edges: Vec<T>,
}

impl<T> VertexEntry<T> {
    fn new(head: T) -> Self {
        Self {
            head,
            edges: Vec::new(),
        }
    }

    /// Length of the list form, head included.
    #[inline]
    fn len(&self) -> usize {
        self.edges.len() + 1
    }
}

/// Borrowed view of one vertex list.
#[derive(Debug, Clone, Copy)]
pub struct VertexList<'a, T> {
    id: ListId,
    head: &'a T,
    edges: &'a [T],
}

impl<'a, T> VertexList<'a, T> {
    /// Handle of this list.
    #[inline]
    pub fn id(&self) -> ListId {
        self.id
    }

    /// The vertex value.
    #[inline]
    pub fn head(&self) -> &'a T {
        self.head
    }

    /// Adjacent values in insertion order.
    #[inline]
    pub fn edges(&self) -> &'a [T] {
        self.edges
    }

    /// Number of edge entries.
    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// A directed graph stored as one value list per vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(n)\) | Duplicate check scans every head |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for an existing edge first |
/// | `add_edge_to_value` | \(O(n)\) | May create the target vertex |
/// | `is_edge` | \(O(\text{out-degree})\) | Value scan of one list |
/// | `is_edge_anywhere` | \(O(n + m)\) | Value scan of every list |
/// | `graph_size` | \(O(1)\) | |
#[derive(Debug)]
pub struct AdjacencyList<T, M = ByEquality> {
    /// Tag stamped into every handle this graph issues.
    tag: u64,
    entries: Vec<VertexEntry<T>>,
    _matcher: PhantomData<M>,
}

impl<T> AdjacencyList<T, ByEquality> {
    /// Creates an empty graph that matches values with `PartialEq`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> AdjacencyList<T, ByOrdering> {
    /// Creates an empty graph that matches values with `PartialOrd`.
    pub fn new_ordered() -> Self {
        Self::default()
    }
}

impl<T, M> AdjacencyList<T, M> {
    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tag: fresh_tag(),
            entries: Vec::with_capacity(capacity),
            _matcher: PhantomData,
        }
    }

    #[inline]
    fn handle(&self, index: usize) -> ListId {
        ListId::new(self.tag, index)
    }

    /// Resolves a handle to a position, if this graph issued it.
    #[inline]
    fn index_of(&self, list: ListId) -> Option<usize> {
        (list.graph() == self.tag && list.index() < self.entries.len()).then_some(list.index())
    }

    fn require(&self, list: ListId) -> Result<usize> {
        self.index_of(list).ok_or_else(|| {
            graph_debug!(list = %list, "handle does not belong to this graph");
            GraphError::UnknownVertex(list)
        })
    }

    /// Checks whether `list` is one of this graph's vertex lists.
    #[inline]
    pub fn contains_list(&self, list: ListId) -> bool {
        self.index_of(list).is_some()
    }

    /// Returns a view of `list`.
    pub fn vertex_list(&self, list: ListId) -> Option<VertexList<'_, T>> {
        self.index_of(list).map(|index| self.view(index))
    }

    fn view(&self, index: usize) -> VertexList<'_, T> {
        let entry = &self.entries[index];
        VertexList {
            id: self.handle(index),
            head: &entry.head,
            edges: &entry.edges,
        }
    }

    /// Iterates over every vertex list in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = VertexList<'_, T>> + '_ {
        (0..self.entries.len()).map(move |index| self.view(index))
    }

    /// Length of `list` counted the compatible way: head plus edges.
    pub fn number_of_edges_in(&self, list: ListId) -> Option<usize> {
        self.index_of(list).map(|index| self.entries[index].len())
    }

    /// Graph-wide edge count in the compatible convention: one plus the
    /// number of edge entries. An empty graph reports one.
    pub fn number_of_edges(&self) -> usize {
        1 + self.edge_count()
    }

    /// Number of edge entries in `list`.
    pub fn out_degree(&self, list: ListId) -> Option<usize> {
        self.index_of(list).map(|index| self.entries[index].edges.len())
    }

    /// Number of edge entries in the whole graph.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.edges.len()).sum()
    }

    /// Number of vertices.
    #[inline]
    pub fn graph_size(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, M: ValueMatcher<T>> AdjacencyList<T, M> {
    fn position(&self, value: &T) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| M::matches(&entry.head, value))
    }

    fn has_edge_at(&self, index: usize, value: &T) -> bool {
        self.entries[index]
            .edges
            .iter()
            .any(|edge| M::matches(edge, value))
    }

    /// Adds a vertex holding `value`.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] if a vertex with a matching
    /// value already exists; the graph is left unchanged.
    pub fn add_vertex(&mut self, value: T) -> Result<ListId> {
        if let Some(index) = self.position(&value) {
            let existing = self.handle(index);
            graph_debug!(existing = %existing, "duplicate vertex rejected");
            return Err(GraphError::DuplicateVertex { existing });
        }
        let index = self.entries.len();
        self.entries.push(VertexEntry::new(value));
        let id = self.handle(index);
        graph_trace!(list = %id, size = self.entries.len(), "vertex added");
        Ok(id)
    }

    /// Appends an edge from `list` to the vertex holding `value`, creating
    /// that vertex first if needed.
    ///
    /// The value is appended exactly once, even when the target is created.
    /// Parallel edges are not filtered. Returns the target's handle.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `list` is not a member.
    pub fn add_edge_to_value(&mut self, list: ListId, value: T) -> Result<ListId>
    where
        T: Clone,
    {
        let source = self.require(list)?;
        let target = match self.position(&value) {
            Some(index) => self.handle(index),
            None => self.add_vertex(value.clone())?,
        };
        self.entries[source].edges.push(value);
        graph_trace!(from = %list, to = %target, "edge added");
        Ok(target)
    }

    /// Adds the edge `start -> end` unless it already exists.
    ///
    /// Returns `Ok(true)` if the edge was appended and `Ok(false)` if `start`
    /// already lists `end`'s value.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either handle is not a member.
    pub fn add_edge(&mut self, start: ListId, end: ListId) -> Result<bool>
    where
        T: Clone,
    {
        let source = self.require(start)?;
        let target = self.require(end)?;
        if self.has_edge_at(source, &self.entries[target].head) {
            graph_debug!(from = %start, to = %end, "duplicate edge rejected");
            return Ok(false);
        }
        let head = self.entries[target].head.clone();
        self.entries[source].edges.push(head);
        graph_trace!(from = %start, to = %end, "edge added");
        Ok(true)
    }

    /// Checks whether a vertex holding `value` exists.
    pub fn is_vertex(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Returns the handle of the vertex holding `value`.
    pub fn find_vertex(&self, value: &T) -> Option<ListId> {
        self.position(value).map(|index| self.handle(index))
    }

    /// Checks whether `list` has an edge entry matching `value`.
    ///
    /// Only the tail is searched; the head is skipped by position, not by
    /// value. A tail entry equal to the head (a self-loop) is therefore
    /// reported as an edge, and a second `add_edge(a, a)` is refused like
    /// any other duplicate. Foreign handles report `false`.
    pub fn is_edge(&self, list: ListId, value: &T) -> bool {
        self.index_of(list)
            .is_some_and(|index| self.has_edge_at(index, value))
    }

    /// Checks whether any vertex has an edge entry matching `value`.
    pub fn is_edge_anywhere(&self, value: &T) -> bool {
        (0..self.entries.len()).any(|index| self.has_edge_at(index, value))
    }

    /// [`number_of_edges_in`](Self::number_of_edges_in) for the vertex
    /// holding `value`.
    pub fn number_of_edges_for(&self, value: &T) -> Option<usize> {
        self.position(value).map(|index| self.entries[index].len())
    }
}

impl<T: fmt::Display, M> AdjacencyList<T, M> {
    /// Renders the graph as text, one line per vertex:
    ///
    /// ```text
    /// Vertex = A   Edges = B C
    /// Vertex = B   Edges =
    /// ```
    pub fn print_adjacency_list(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display, M> fmt::Display for AdjacencyList<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "Vertex = {}   Edges =", entry.head)?;
            for edge in &entry.edges {
                write!(f, " {edge}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, M> Default for AdjacencyList<T, M> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
