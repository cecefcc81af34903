//! Community detection algorithms
//!
//! Strongly connected components via Kosaraju's two-pass method.

use super::common::{GraphView, NodeIndex};
use super::topology::dfs_finish_order;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of SCC algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SccResult {
    /// Components in the order the second pass completed them
    pub components: Vec<Vec<NodeIndex>>,
    /// Node index -> position in `components`
    pub node_component: Vec<usize>,
    /// Component contains a cycle (more than one node, or a self-loop)
    pub cyclic: Vec<bool>,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

const UNASSIGNED: usize = usize::MAX;

/// Strongly Connected Components (Kosaraju)
///
/// 1. DFS over the view recording finish order
/// 2. DFS over the transpose (the incoming CSR) in descending finish order;
///    every tree of the second pass is one component
///
/// The first component returned has no incoming edges from the others, i.e.
/// components come out in topological order of the condensation.
pub fn strongly_connected_components(view: &GraphView) -> SccResult {
    let n = view.node_count;
    let (finished, _) = dfs_finish_order(view);

    let mut node_component = vec![UNASSIGNED; n];
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();
    let mut stack: Vec<NodeIndex> = Vec::new();

    for &root in finished.iter().rev() {
        if node_component[root] != UNASSIGNED {
            continue;
        }

        let id = components.len();
        let mut members = Vec::new();
        node_component[root] = id;
        stack.push(root);

        while let Some(u) = stack.pop() {
            members.push(u);
            for &p in view.predecessors(u) {
                if node_component[p] == UNASSIGNED {
                    node_component[p] = id;
                    stack.push(p);
                }
            }
        }

        components.push(members);
    }

    let cyclic = components
        .iter()
        .map(|members| members.len() > 1 || view.has_self_loop(members[0]))
        .collect();

    SccResult {
        components,
        node_component,
        cyclic,
    }
}
