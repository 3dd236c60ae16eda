//! The two graph representations.
//!
//! - [`NodeGraph`]: vertices are [`VertexNode`]s holding neighbour ids, and
//!   edges are followed by identity.
//! - [`AdjacencyList`]: each vertex is a value list whose tail names its
//!   neighbours by value.
//!
//! The representations are independent; neither converts into the other.

pub mod adjacency_list;
pub mod node;
pub mod node_graph;

pub use adjacency_list::{AdjacencyList, VertexList};
pub use node::{Edge, VertexNode};
pub use node_graph::NodeGraph;
