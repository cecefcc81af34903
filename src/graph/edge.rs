//! Edge implementation
//!
//! An edge is an ordered (source, target) pair plus an integer weight.
//! Whether it can be walked backwards is decided by the owning graph's mode.

use super::types::{EdgeId, NodeId};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight given to edges created without an explicit one
pub const DEFAULT_WEIGHT: i64 = 1;

/// A weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    pub weight: i64,
}

impl Edge {
    /// Create a new edge with the default weight
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self::with_weight(id, source, target, DEFAULT_WEIGHT)
    }

    /// Create a new edge with an explicit weight
    pub fn with_weight(id: EdgeId, source: NodeId, target: NodeId, weight: i64) -> Self {
        Edge {
            id,
            source,
            target,
            weight,
        }
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, node1: NodeId, node2: NodeId) -> bool {
        (self.source == node1 && self.target == node2)
            || (self.source == node2 && self.target == node1)
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: NodeId) -> bool {
        self.source == node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: NodeId) -> bool {
        self.target == node
    }

    /// Check if either endpoint is `node`
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The endpoint opposite `node`, or None if the edge does not touch it.
    /// A self-loop returns `node` itself.
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}
