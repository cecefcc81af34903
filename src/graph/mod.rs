//! Core graph implementation
//!
//! This module implements the graph data model with:
//! - Dense, never-reused node and edge ids
//! - Directed or undirected edges, chosen once per graph
//! - Integer edge weights (default 1)
//! - Append-only arena storage with per-node adjacency lists
//! - Caller-owned node payloads in a side table

pub mod edge;
pub mod payload;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::{Edge, DEFAULT_WEIGHT};
pub use payload::NodeData;
pub use store::{Graph, GraphConfig, GraphError, GraphResult};
pub use types::{EdgeId, GraphMode, NodeId};
