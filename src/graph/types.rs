//! Core type definitions for the graph library

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node
///
/// Dense from 0 in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Position in dense per-node arrays
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        NodeId(idx as u64)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Unique identifier for an edge
///
/// Dense from 0 in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Position in the edge arena
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        EdgeId(idx as u64)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Whether edges are one-way or two-way. Fixed when the graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GraphMode {
    #[default]
    Directed,
    Undirected,
}

impl GraphMode {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphMode::Directed)
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphMode::Directed => write!(f, "directed"),
            GraphMode::Undirected => write!(f, "undirected"),
        }
    }
}
