//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense node index (0..node_count)
pub type NodeIndex = usize;

/// An edge of the view, addressed by dense node indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedEdge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: i64,
}

impl WeightedEdge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: i64) -> Self {
        WeightedEdge { source, target, weight }
    }
}

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Rows are sorted by ascending neighbour index so traversals are deterministic;
/// parallel edges keep their insertion order within a row.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Whether edges are traversable from source to target only
    pub directed: bool,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<NodeIndex>,

    /// Incoming edges CSR structure (the transpose graph)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<NodeIndex>,

    /// Every edge in insertion order
    pub edges: Vec<WeightedEdge>,
}

impl GraphView {
    /// Build a view from an edge list.
    ///
    /// For undirected views each edge appears in the rows of both endpoints
    /// (once for a self-loop) and the incoming CSR mirrors the outgoing one.
    ///
    /// Panics if an edge references an index >= `node_count`.
    pub fn from_edges(node_count: usize, directed: bool, edges: Vec<WeightedEdge>) -> Self {
        let mut forward: Vec<(NodeIndex, NodeIndex)> = Vec::with_capacity(edges.len() * 2);
        let mut backward: Vec<(NodeIndex, NodeIndex)> = Vec::with_capacity(edges.len());

        for edge in &edges {
            assert!(
                edge.source < node_count && edge.target < node_count,
                "edge {}->{} out of range for {} nodes",
                edge.source,
                edge.target,
                node_count
            );
            forward.push((edge.source, edge.target));
            if directed {
                backward.push((edge.target, edge.source));
            } else if edge.source != edge.target {
                forward.push((edge.target, edge.source));
            }
        }

        let (out_offsets, out_targets) = to_csr(node_count, forward);
        let (in_offsets, in_sources) = if directed {
            to_csr(node_count, backward)
        } else {
            (out_offsets.clone(), out_targets.clone())
        };

        GraphView {
            node_count,
            directed,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            edges,
        }
    }

    /// Number of stored edges (each undirected edge counted once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// True if the node has an edge to itself
    pub fn has_self_loop(&self, idx: NodeIndex) -> bool {
        self.successors(idx).binary_search(&idx).is_ok()
    }
}

/// Flatten (row, column) pairs into CSR offsets and columns.
fn to_csr(node_count: usize, mut pairs: Vec<(NodeIndex, NodeIndex)>) -> (Vec<usize>, Vec<NodeIndex>) {
    // Stable: parallel edges stay in insertion order
    pairs.sort_by_key(|&(row, col)| (row, col));

    let mut offsets = Vec::with_capacity(node_count + 1);
    let mut columns = Vec::with_capacity(pairs.len());

    offsets.push(0);
    let mut cursor = 0;
    for row in 0..node_count {
        while cursor < pairs.len() && pairs[cursor].0 == row {
            columns.push(pairs[cursor].1);
            cursor += 1;
        }
        offsets.push(columns.len());
    }

    (offsets, columns)
}
