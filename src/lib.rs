//! Arbor Graph Library
//!
//! An in-memory graph with directed or undirected, integer-weighted edges and
//! three classic algorithms:
//!
//! - Topological sort (directed, depth-first, reverse finish order)
//! - Strongly connected components (directed, Kosaraju)
//! - Minimum spanning tree (undirected, Kruskal)
//!
//! # Architecture
//!
//! - [`graph`]: append-only arena storage with dense node/edge ids
//! - [`algo`]: builds a frozen CSR snapshot and runs the kernels from the
//!   `arbor-graph-algorithms` crate
//!
//! Algorithms borrow the graph immutably, so it cannot be mutated while one
//! is running.
//!
//! ## Example Usage
//!
//! ```rust
//! use arbor::{Graph, GraphMode, NodeData};
//!
//! let mut graph = Graph::new(GraphMode::Directed);
//! let shirt = graph.add_node();
//! let tie = graph.add_node();
//! let jacket = graph.add_node();
//! graph.add_edge(shirt, tie).unwrap();
//! graph.add_edge(tie, jacket).unwrap();
//!
//! // Payloads live next to the graph, keyed by node id
//! let mut names = NodeData::new();
//! names.insert(shirt, "shirt");
//! names.insert(tie, "tie");
//! names.insert(jacket, "jacket");
//!
//! let order = graph.topological_sort().unwrap();
//! let named: Vec<_> = order.iter().map(|&n| names[n]).collect();
//! assert_eq!(named, vec!["shirt", "tie", "jacket"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{MstResult, SccResult, TopologicalSortConfig};
pub use graph::{
    Edge, EdgeId, Graph, GraphConfig, GraphError, GraphMode, GraphResult, NodeData, NodeId,
    DEFAULT_WEIGHT,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
