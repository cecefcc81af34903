//! Minimum Spanning Tree algorithms
//!
//! Kruskal's algorithm on undirected graphs. Disconnected graphs yield a
//! minimum spanning forest.

use super::build_view;
use crate::graph::{Edge, EdgeId, Graph, GraphMode, GraphResult, NodeId};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    /// Selected edges with their original ids, endpoints and weights
    pub edges: Vec<Edge>,
    /// Sum of selected weights; i128 so no set of i64 weights can overflow it
    pub total_weight: i128,
    /// Number of trees in the forest (connected components of the graph)
    pub tree_count: usize,
}

impl MstResult {
    /// True when the edges connect every node (a forest of at most one tree)
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count <= 1
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|edge| edge.id).collect()
    }

    /// Nodes touched by the selected edges, ascending
    pub fn covered_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self
            .edges
            .iter()
            .flat_map(|edge| [edge.source, edge.target])
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }
}

impl Graph {
    /// Minimum spanning tree (or forest) of an undirected weighted graph
    pub fn minimum_spanning_tree(&self) -> GraphResult<MstResult> {
        self.require_mode(GraphMode::Undirected)?;

        let view = build_view(self);
        let result = arbor_graph_algorithms::kruskal_mst(&view);
        debug!(
            "MST selected {} of {} edges, total weight {}, {} tree(s)",
            result.edge_indices.len(),
            self.edge_count(),
            result.total_weight,
            result.tree_count
        );

        Ok(MstResult {
            edges: result
                .edge_indices
                .iter()
                .filter_map(|&idx| self.get_edge(EdgeId::from_index(idx)).copied())
                .collect(),
            total_weight: result.total_weight,
            tree_count: result.tree_count,
        })
    }
}
