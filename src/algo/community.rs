//! Community detection algorithms
//!
//! Strongly connected components (Kosaraju) on directed graphs.

use super::build_view;
use crate::graph::{Graph, GraphMode, GraphResult, NodeId};
use tracing::debug;

/// Result of SCC algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    /// Components in discovery order; the first has no incoming edges from the rest
    pub components: Vec<Vec<NodeId>>,
    /// Node index -> component index
    pub node_component: Vec<usize>,
    /// Component index -> contains a cycle (several nodes, or a self-loop)
    pub cyclic: Vec<bool>,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component_of(&self, node: NodeId) -> Option<usize> {
        self.node_component.get(node.index()).copied()
    }

    /// True if each node can reach the other
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }

    pub fn is_cyclic(&self, component: usize) -> bool {
        self.cyclic.get(component).copied().unwrap_or(false)
    }

    /// Edges of the condensation: (from component, to component), sorted and
    /// deduplicated. Every pair satisfies `from < to`.
    pub fn condensation_edges(&self, graph: &Graph) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = graph
            .edges()
            .iter()
            .filter_map(|edge| {
                let from = self.component_of(edge.source)?;
                let to = self.component_of(edge.target)?;
                (from != to).then_some((from, to))
            })
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}

impl Graph {
    /// Partition the nodes of a directed graph into strongly connected components
    pub fn strongly_connected_components(&self) -> GraphResult<SccResult> {
        self.require_mode(GraphMode::Directed)?;

        let view = build_view(self);
        let result = arbor_graph_algorithms::strongly_connected_components(&view);
        debug!(
            "Found {} strongly connected components among {} nodes",
            result.component_count(),
            self.node_count()
        );

        Ok(SccResult {
            components: result
                .components
                .into_iter()
                .map(|members| members.into_iter().map(NodeId::from_index).collect())
                .collect(),
            node_component: result.node_component,
            cyclic: result.cyclic,
        })
    }
}
