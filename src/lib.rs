//! # `graphkit` - Generic Graph Containers
//!
//! Two independent graph representations, both generic over the vertex value
//! type `T`:
//!
//! - [`NodeGraph`] stores [`VertexNode`]s. Each vertex keeps the *identities*
//!   of its neighbours, so two vertices with equal values are still distinct
//!   edge targets. Every operation is total: absence is `None` or `false`,
//!   never an error.
//! - [`AdjacencyList`] stores one list per vertex whose head is the vertex
//!   value and whose tail names the neighbours *by value*. Vertex values are
//!   unique, and violations are reported as [`GraphError`]s.
//!
//! ## Identity and value
//!
//! Edge membership is decided by identity ([`VertexId`], [`ListId`]). Searches
//! by value go through a [`ValueMatcher`] picked as a type parameter:
//! [`ByEquality`] (the default) or [`ByOrdering`], which compares through
//! `PartialOrd` and falls back to `PartialEq` for incomparable values.
//!
//! ## Vertex lifetime
//!
//! Removing a vertex from a [`NodeGraph`] does not touch edges that point at
//! it. The graph keeps the vertex in its arena, so those edges stay valid to
//! follow.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, mutations emit `TRACE` events and
//! rejected operations emit `DEBUG` events.
//!
//! ## Example
//!
//! ```rust
//! use graphkit::{AdjacencyList, NodeGraph};
//!
//! let mut nodes = NodeGraph::new();
//! let a = nodes.insert_value("a");
//! let b = nodes.insert_value("b");
//! nodes.add_edge(a, b);
//! assert!(nodes.is_edge(a, b));
//! assert_eq!(nodes.find_vertex(&"b"), Some(b));
//!
//! let mut lists = AdjacencyList::new();
//! let x = lists.add_vertex("x")?;
//! lists.add_edge_to_value(x, "y")?;
//! assert_eq!(lists.graph_size(), 2);
//! assert_eq!(lists.print_adjacency_list(), "Vertex = x   Edges = y\nVertex = y   Edges =\n");
//! # Ok::<(), graphkit::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;
pub mod id;
pub mod matching;

pub use error::{GraphError, Result};
pub use graph::{AdjacencyList, Edge, NodeGraph, VertexList, VertexNode};
pub use id::{ListId, VertexId};
pub use matching::{ByEquality, ByOrdering, ValueMatcher};

// Handles are plain integers.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexId>() == mem::size_of::<u64>());
    assert!(mem::size_of::<Edge>() == 2 * mem::size_of::<u64>());
    assert!(mem::size_of::<ListId>() <= 2 * mem::size_of::<u64>());
};
