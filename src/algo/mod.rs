//! Graph algorithms module
//!
//! Algorithms are implemented in the `arbor-graph-algorithms` crate over a
//! dense CSR `GraphView`. This module provides the integration layer: mode
//! checks, snapshotting the graph into a view, and mapping results back to
//! graph ids.

pub mod community;
pub mod mst;
pub mod topology;

use crate::graph::Graph;
use arbor_graph_algorithms::{GraphView, WeightedEdge};

pub use community::SccResult;
pub use mst::MstResult;
pub use topology::TopologicalSortConfig;

/// Build a GraphView from the graph for algorithm execution
///
/// The view is a frozen snapshot: node ids map 1:1 to view indices and edge
/// ids to positions in `GraphView::edges`.
pub fn build_view(graph: &Graph) -> GraphView {
    let edges = graph
        .edges()
        .iter()
        .map(|edge| WeightedEdge::new(edge.source.index(), edge.target.index(), edge.weight))
        .collect();

    GraphView::from_edges(graph.node_count(), graph.is_directed(), edges)
}
