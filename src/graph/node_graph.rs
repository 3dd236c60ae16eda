//! `NodeGraph` — a graph made of [`VertexNode`]s linked by identity.
//!
//! Vertices live in an id-keyed arena that outlives graph membership. Removing
//! a vertex only takes it out of the membership list, so edges that still
//! point at it stay valid to follow. Nothing cascades: callers that want the
//! incoming edges gone remove them explicitly.
//!
//! The arena is never shrunk implicitly, so a graph that keeps inserting and
//! removing vertices grows until [`NodeGraph::purge_detached`] is called.
//!
//! # Performance
//! - `insert`: O(1) amortized
//! - `remove_vertex`: O(n) (membership scan)
//! - `add_edge`: O(1) amortized
//! - `remove_edge` / `is_edge`: O(out-degree)
//! - `find_vertex`: O(n)

use core::marker::PhantomData;
use std::collections::{HashMap, HashSet};

use super::node::{Edge, VertexNode};
use crate::id::VertexId;
use crate::matching::{ByEquality, ByOrdering, ValueMatcher};

/// A node-based graph.
///
/// `M` selects how [`find_vertex`](Self::find_vertex) compares values; see
/// [`matching`](crate::matching). No operation fails: lookups return `None`,
/// predicates return `false`, and mutations on unknown vertices do nothing.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(1)\) amortized | Arena insert plus membership push |
/// | `remove_vertex` | \(O(n)\) | Membership scan; the arena keeps the node |
/// | `add_edge` | \(O(1)\) amortized | No membership validation |
/// | `is_edge` | \(O(\text{out-degree})\) | Identity scan |
/// | `find_vertex` | \(O(n)\) | Value scan through `M` |
#[derive(Debug)]
pub struct NodeGraph<T, M = ByEquality> {
    /// Every vertex ever inserted, members or not.
    nodes: HashMap<VertexId, VertexNode<T>>,
    /// Membership in insertion order. May repeat an id.
    vertices: Vec<VertexId>,
    _matcher: PhantomData<M>,
}

impl<T> NodeGraph<T, ByEquality> {
    /// Creates an empty graph that matches values with `PartialEq`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph whose first member is `vertex`.
    pub fn with_vertex(vertex: VertexNode<T>) -> Self {
        let mut graph = Self::new();
        graph.insert(vertex);
        graph
    }
}

impl<T> NodeGraph<T, ByOrdering> {
    /// Creates an empty graph that matches values with `PartialOrd`.
    pub fn new_ordered() -> Self {
        Self::default()
    }
}

impl<T, M> NodeGraph<T, M> {
    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity),
            _matcher: PhantomData,
        }
    }

    /// Adds `vertex` to the graph and returns its id.
    ///
    /// Values are not checked for duplicates.
    pub fn insert(&mut self, vertex: VertexNode<T>) -> VertexId {
        let id = vertex.id();
        self.nodes.insert(id, vertex);
        self.vertices.push(id);
        graph_trace!(vertex = %id, size = self.vertices.len(), "vertex inserted");
        id
    }

    /// Wraps `value` in a new vertex and adds it.
    pub fn insert_value(&mut self, value: T) -> VertexId {
        self.insert(VertexNode::new(value))
    }

    /// Adds a vertex this graph already stores to the membership list again.
    ///
    /// Works for removed vertices and for current members alike; in the latter
    /// case the vertex is listed twice. Returns `false` for ids the graph has
    /// never stored.
    pub fn reinsert(&mut self, id: VertexId) -> bool {
        if !self.nodes.contains_key(&id) {
            graph_debug!(vertex = %id, "reinsert of unknown vertex ignored");
            return false;
        }
        self.vertices.push(id);
        graph_trace!(vertex = %id, size = self.vertices.len(), "vertex reinserted");
        true
    }

    /// Removes the first membership entry for `id`.
    ///
    /// Edges pointing at the vertex are left in place and the vertex stays
    /// reachable through [`vertex`](Self::vertex).
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        match self.vertices.iter().position(|&member| member == id) {
            Some(pos) => {
                self.vertices.remove(pos);
                graph_trace!(vertex = %id, size = self.vertices.len(), "vertex removed");
                true
            }
            None => {
                graph_debug!(vertex = %id, "remove of non-member ignored");
                false
            }
        }
    }

    /// Adds the edge `start -> end` via the start vertex.
    ///
    /// Neither endpoint has to be a member; `start` only has to be stored.
    /// Self-edges are rejected.
    pub fn add_edge(&mut self, start: VertexId, end: VertexId) -> bool {
        self.nodes
            .get_mut(&start)
            .is_some_and(|vertex| vertex.add_edge(end))
    }

    /// Removes the first edge `start -> end`.
    pub fn remove_edge(&mut self, start: VertexId, end: VertexId) -> bool {
        self.nodes
            .get_mut(&start)
            .is_some_and(|vertex| vertex.remove_edge(end))
    }

    /// Checks whether `vertex` has an edge to `candidate`.
    pub fn is_edge(&self, vertex: VertexId, candidate: VertexId) -> bool {
        self.nodes
            .get(&vertex)
            .is_some_and(|node| node.is_connected_to(candidate))
    }

    /// Drops stored vertices that can no longer be reached from any member.
    ///
    /// Detached vertices that a member still points at (directly or through
    /// other detached vertices) are kept, so every edge followed from a
    /// member keeps resolving. Returns the number of vertices dropped.
    pub fn purge_detached(&mut self) -> usize {
        let mut reachable: HashSet<VertexId> = HashSet::with_capacity(self.vertices.len());
        let mut pending: Vec<VertexId> = self.vertices.clone();
        while let Some(id) = pending.pop() {
            if !reachable.insert(id) {
                continue;
            }
            if let Some(vertex) = self.nodes.get(&id) {
                pending.extend(
                    vertex
                        .adjacent()
                        .iter()
                        .filter(|next| !reachable.contains(*next)),
                );
            }
        }

        let before = self.nodes.len();
        self.nodes.retain(|id, _| reachable.contains(id));
        let dropped = before - self.nodes.len();
        graph_trace!(dropped, stored = self.nodes.len(), "detached vertices purged");
        dropped
    }

    /// Number of vertices held in the arena, members or not.
    #[inline]
    pub fn stored(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `id` if it is currently a member.
    pub fn find_vertex_by_id(&self, id: VertexId) -> Option<VertexId> {
        self.vertices.iter().copied().find(|&member| member == id)
    }

    /// Checks membership of `id`.
    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.find_vertex_by_id(id).is_some()
    }

    /// Looks up a stored vertex, member or not.
    pub fn vertex(&self, id: VertexId) -> Option<&VertexNode<T>> {
        self.nodes.get(&id)
    }

    /// Looks up a stored vertex mutably, member or not.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut VertexNode<T>> {
        self.nodes.get_mut(&id)
    }

    /// Returns the value of a stored vertex.
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(VertexNode::value)
    }

    /// Replaces the value of a stored vertex.
    pub fn set_value(&mut self, id: VertexId, value: T) -> bool {
        match self.nodes.get_mut(&id) {
            Some(vertex) => {
                vertex.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Number of membership entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over members in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexNode<T>> + '_ {
        self.vertices.iter().filter_map(move |id| self.nodes.get(id))
    }

    /// Iterates over the outgoing edges of every member, member by member.
    ///
    /// Targets are reported whether or not they are still members.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(|vertex| {
            let start = vertex.id();
            vertex
                .adjacent()
                .iter()
                .map(move |&end| Edge::new(start, end))
        })
    }
}

impl<T, M: ValueMatcher<T>> NodeGraph<T, M> {
    /// Finds the first member whose value matches `value`.
    pub fn find_vertex(&self, value: &T) -> Option<VertexId> {
        self.vertices.iter().copied().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|vertex| M::matches(vertex.value(), value))
        })
    }

    /// Removes the first member whose value matches `value`.
    ///
    /// Returns the id of the removed vertex.
    pub fn remove_vertex_by_value(&mut self, value: &T) -> Option<VertexId> {
        let id = self.find_vertex(value)?;
        self.remove_vertex(id);
        Some(id)
    }
}

impl<T, M> Default for NodeGraph<T, M> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            vertices: Vec::new(),
            _matcher: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_find_by_value() {
        let mut graph = NodeGraph::new();
        let a = graph.insert_value(10);
        let b = graph.insert_value(20);

        assert_eq!(graph.size(), 2);
        assert_eq!(graph.find_vertex(&10), Some(a));
        assert_eq!(graph.find_vertex(&20), Some(b));
        assert_eq!(graph.find_vertex(&30), None);
    }

    #[test]
    fn duplicate_values_are_allowed_and_first_wins() {
        let mut graph = NodeGraph::new();
        let first = graph.insert_value("dup");
        let second = graph.insert_value("dup");

        assert_ne!(first, second);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.find_vertex(&"dup"), Some(first));
    }

    #[test]
    fn with_vertex_keeps_prewired_edges() {
        let mut root = VertexNode::new(0);
        let leaf = VertexNode::new(1);
        root.add_edge(leaf.id());

        let root_id = root.id();
        let leaf_id = leaf.id();
        let mut graph = NodeGraph::with_vertex(root);
        graph.insert(leaf);

        assert_eq!(graph.size(), 2);
        assert!(graph.is_edge(root_id, leaf_id));
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = NodeGraph::new();
        let a = graph.insert_value('a');
        let b = graph.insert_value('b');

        assert!(graph.add_edge(a, b));
        assert!(graph.is_edge(a, b));
        assert!(!graph.is_edge(b, a));

        assert!(graph.add_edge(b, a));
        assert!(graph.is_edge(b, a));
    }

    #[test]
    fn self_edge_through_graph_is_ignored() {
        let mut graph = NodeGraph::new();
        let a = graph.insert_value(1);

        assert!(!graph.add_edge(a, a));
        assert_eq!(graph.vertex(a).map(VertexNode::degree), Some(0));
    }

    #[test]
    fn remove_edge_and_unknown_endpoints_are_no_ops() {
        let mut graph = NodeGraph::new();
        let a = graph.insert_value(1);
        let b = graph.insert_value(2);
        let stranger = VertexNode::new(3).id();

        assert!(!graph.remove_edge(a, b));
        assert!(!graph.add_edge(stranger, a));
        assert!(!graph.is_edge(stranger, a));

        graph.add_edge(a, b);
        assert!(graph.remove_edge(a, b));
        assert!(!graph.is_edge(a, b));
    }

    #[test]
    fn removal_does_not_cascade() {
        let mut graph = NodeGraph::new();
        let v1 = graph.insert_value(1);
        let v2 = graph.insert_value(2);
        let _v3 = graph.insert_value(3);
        graph.add_edge(v1, v2);

        assert!(graph.remove_vertex(v2));
        assert_eq!(graph.size(), 2);
        assert!(!graph.contains(v2));

        // The edge still points at the detached vertex, which still resolves.
        assert!(graph.is_edge(v1, v2));
        assert_eq!(graph.value(v2), Some(&2));
        assert_eq!(graph.find_vertex(&2), None);
    }

    #[test]
    fn purge_keeps_what_members_still_reach() {
        let mut graph = NodeGraph::new();
        let hub = graph.insert_value("hub");
        let kept = graph.insert_value("kept");
        let chained = graph.insert_value("chained");
        let orphan = graph.insert_value("orphan");
        graph.add_edge(hub, kept);
        graph.add_edge(kept, chained);
        graph.add_edge(orphan, hub);

        graph.remove_vertex(kept);
        graph.remove_vertex(chained);
        graph.remove_vertex(orphan);
        assert_eq!(graph.stored(), 4);

        assert_eq!(graph.purge_detached(), 1);
        assert_eq!(graph.stored(), 3);
        assert!(graph.vertex(orphan).is_none());
        assert_eq!(graph.value(kept), Some(&"kept"));
        assert_eq!(graph.value(chained), Some(&"chained"));
        assert!(!graph.reinsert(orphan));
        assert_eq!(graph.purge_detached(), 0);
    }

    #[test]
    fn churn_is_reclaimed_by_purge() {
        let mut graph = NodeGraph::new();
        let anchor = graph.insert_value(0);
        for i in 1..=100 {
            let id = graph.insert_value(i);
            graph.remove_vertex(id);
        }
        assert_eq!(graph.stored(), 101);

        assert_eq!(graph.purge_detached(), 100);
        assert_eq!(graph.stored(), 1);
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.find_vertex(&0), Some(anchor));
    }

    #[test]
    fn remove_by_value_and_absent_value() {
        let mut graph = NodeGraph::new();
        graph.insert_value(1);
        let two = graph.insert_value(2);

        assert_eq!(graph.remove_vertex_by_value(&2), Some(two));
        assert_eq!(graph.remove_vertex_by_value(&2), None);
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn reinsert_lists_a_vertex_twice() {
        let mut graph = NodeGraph::new();
        let a = graph.insert_value(1);

        assert!(graph.reinsert(a));
        assert_eq!(graph.size(), 2);

        assert!(graph.remove_vertex(a));
        assert!(graph.contains(a));
        assert!(graph.remove_vertex(a));
        assert!(!graph.contains(a));
        assert!(!graph.remove_vertex(a));

        assert!(graph.reinsert(a));
        assert!(graph.contains(a));
        assert!(!graph.reinsert(VertexNode::new(9).id()));
    }

    #[test]
    fn set_value_changes_what_find_sees() {
        let mut graph = NodeGraph::new();
        let a = graph.insert_value(String::from("old"));

        assert!(graph.set_value(a, String::from("new")));
        assert_eq!(graph.find_vertex(&String::from("old")), None);
        assert_eq!(graph.find_vertex(&String::from("new")), Some(a));

        if let Some(vertex) = graph.vertex_mut(a) {
            vertex.value_mut().push('!');
        }
        assert_eq!(graph.value(a).map(String::as_str), Some("new!"));
    }

    #[test]
    fn ordered_graph_matches_by_comparison() {
        let mut graph = NodeGraph::new_ordered();
        let zero = graph.insert_value(0.0_f64);

        assert_eq!(graph.find_vertex(&-0.0), Some(zero));
        assert_eq!(graph.find_vertex(&f64::NAN), None);
    }

    #[test]
    fn edges_iterate_member_by_member() {
        let mut graph = NodeGraph::new();
        let a = graph.insert_value('a');
        let b = graph.insert_value('b');
        let c = graph.insert_value('c');
        graph.add_edge(a, b);
        graph.add_edge(a, c);
        graph.add_edge(c, a);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![Edge::new(a, b), Edge::new(a, c), Edge::new(c, a)]);

        graph.remove_vertex(a);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![Edge::new(c, a)]);
    }
}
