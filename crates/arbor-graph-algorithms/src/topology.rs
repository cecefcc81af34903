//! Depth-first ordering algorithms
//!
//! Finish-order DFS and topological sort over directed views.

use super::common::{GraphView, NodeIndex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a topological sort
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopoSortResult {
    /// Nodes in reverse DFS finish order
    pub order: Vec<NodeIndex>,
    /// First edge found pointing back to a node still on the DFS stack
    pub back_edge: Option<(NodeIndex, NodeIndex)>,
}

impl TopoSortResult {
    /// True when no back edge was seen, i.e. `order` respects every edge
    pub fn is_acyclic(&self) -> bool {
        self.back_edge.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    Active,
    Done,
}

/// DFS finish order
///
/// Roots are taken in ascending index order and successors are visited in
/// ascending index order, so the result matches a recursive DFS exactly.
/// The traversal uses an explicit stack and visits every node once, so it
/// terminates on cyclic input too. Returns the finish order and the first
/// back edge found (if any).
pub fn dfs_finish_order(view: &GraphView) -> (Vec<NodeIndex>, Option<(NodeIndex, NodeIndex)>) {
    let n = view.node_count;
    let mut state = vec![Visit::New; n];
    let mut finished = Vec::with_capacity(n);
    let mut back_edge = None;

    // (node, position of next successor to inspect)
    let mut stack: Vec<(NodeIndex, usize)> = Vec::new();

    for root in 0..n {
        if state[root] != Visit::New {
            continue;
        }

        state[root] = Visit::Active;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, next) = *frame;
            let successors = view.successors(u);

            if next < successors.len() {
                frame.1 += 1;
                let v = successors[next];
                match state[v] {
                    Visit::New => {
                        state[v] = Visit::Active;
                        stack.push((v, 0));
                    }
                    Visit::Active => {
                        if back_edge.is_none() {
                            back_edge = Some((u, v));
                        }
                    }
                    Visit::Done => {}
                }
            } else {
                stack.pop();
                state[u] = Visit::Done;
                finished.push(u);
            }
        }
    }

    (finished, back_edge)
}

/// Topological Sort
///
/// Reverse DFS finish order. For every edge u->v of an acyclic view, u
/// precedes v. On cyclic input the order is still a permutation of all nodes
/// but precedence is violated for nodes on a cycle; `back_edge` reports it.
pub fn topological_sort(view: &GraphView) -> TopoSortResult {
    let (mut order, back_edge) = dfs_finish_order(view);
    order.reverse();

    TopoSortResult { order, back_edge }
}
