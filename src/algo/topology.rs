//! Topological sort
//!
//! Depth-first search from every node in ascending id order, successors in
//! ascending id order; the result is the reverse finish order.

use super::build_view;
use crate::graph::{Graph, GraphError, GraphMode, GraphResult, NodeId};
use tracing::{debug, warn};

/// Options for [`Graph::topological_sort_with`]
#[derive(Debug, Clone)]
pub struct TopologicalSortConfig {
    /// Fail with `CycleDetected` instead of returning an order that breaks
    /// precedence on a cycle
    pub reject_cycles: bool,
}

impl Default for TopologicalSortConfig {
    fn default() -> Self {
        TopologicalSortConfig {
            reject_cycles: true,
        }
    }
}

impl TopologicalSortConfig {
    /// Return the DFS order even when the graph has a cycle
    pub fn allow_cycles() -> Self {
        TopologicalSortConfig {
            reject_cycles: false,
        }
    }
}

impl Graph {
    /// Topologically sorted node ids
    ///
    /// For every edge u -> v, u comes before v. Requires a directed graph;
    /// a cycle is reported as [`GraphError::CycleDetected`].
    pub fn topological_sort(&self) -> GraphResult<Vec<NodeId>> {
        self.topological_sort_with(&TopologicalSortConfig::default())
    }

    pub fn topological_sort_with(
        &self,
        config: &TopologicalSortConfig,
    ) -> GraphResult<Vec<NodeId>> {
        self.require_mode(GraphMode::Directed)?;
        debug!(
            "Topological sort over {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        );

        let view = build_view(self);
        let result = arbor_graph_algorithms::topological_sort(&view);

        if let Some((from, to)) = result.back_edge {
            let (from, to) = (NodeId::from_index(from), NodeId::from_index(to));
            warn!("Cycle found during topological sort at {} -> {}", from, to);
            if config.reject_cycles {
                return Err(GraphError::CycleDetected { from, to });
            }
        }

        Ok(result.order.into_iter().map(NodeId::from_index).collect())
    }

    /// True if the directed graph contains a cycle (self-loops included)
    pub fn has_cycle(&self) -> GraphResult<bool> {
        self.require_mode(GraphMode::Directed)?;
        let view = build_view(self);
        let (_, back_edge) = arbor_graph_algorithms::dfs_finish_order(&view);
        Ok(back_edge.is_some())
    }
}
