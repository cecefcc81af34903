//! Minimum Spanning Tree algorithms
//!
//! Implements Kruskal's algorithm for MST.

use super::common::GraphView;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MstResult {
    /// Sum of selected weights, widened so any number of i64 weights fits
    pub total_weight: i128,
    /// Positions of the selected edges in `GraphView::edges`, in acceptance order
    pub edge_indices: Vec<usize>,
    /// Number of trees in the spanning forest (connected components)
    pub tree_count: usize,
}

/// Union-Find data structure
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    pub fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    /// Merge the sets holding `i` and `j`. Returns false if they were already joined.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.rank[root_i] < self.rank[root_j] {
            self.parent[root_i] = root_j;
        } else if self.rank[root_i] > self.rank[root_j] {
            self.parent[root_j] = root_i;
        } else {
            self.parent[root_j] = root_i;
            self.rank[root_i] += 1;
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

/// Kruskal's Algorithm for Minimum Spanning Tree
///
/// Edges are taken in ascending weight order, ties broken by insertion order.
/// Edge direction is ignored. A disconnected view yields a minimum spanning
/// forest with fewer than `node_count - 1` edges.
pub fn kruskal_mst(view: &GraphView) -> MstResult {
    let n = view.node_count;
    let wanted = n.saturating_sub(1);

    let mut order: Vec<usize> = (0..view.edges.len()).collect();
    // Stable sort keeps insertion order among equal weights
    order.sort_by_key(|&i| view.edges[i].weight);

    let mut uf = UnionFind::new(n);
    let mut edge_indices = Vec::with_capacity(wanted);
    let mut total_weight: i128 = 0;

    for i in order {
        if edge_indices.len() == wanted {
            break;
        }

        let edge = view.edges[i];
        if uf.union(edge.source, edge.target) {
            total_weight += i128::from(edge.weight);
            edge_indices.push(i);
        }
    }

    MstResult {
        total_weight,
        edge_indices,
        tree_count: uf.set_count(),
    }
}
