//! Caller-owned values attached to nodes
//!
//! The graph itself stores no payloads. `NodeData` is a dense side table
//! keyed by [`NodeId`], so values can be read and mutated freely while the
//! graph is borrowed by an algorithm.

use super::types::NodeId;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData<T> {
    values: Vec<Option<T>>,
    len: usize,
}

impl<T> NodeData<T> {
    pub fn new() -> Self {
        NodeData {
            values: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeData {
            values: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Attach a value to a node, returning the previous one
    ///
    /// Storage is dense up to the node's index, so ids should come from a
    /// [`Graph`](super::Graph). Panics if a slot for that index cannot be
    /// allocated, e.g. for a hand-made `NodeId::new(u64::MAX)`.
    pub fn insert(&mut self, node: NodeId, value: T) -> Option<T> {
        let idx = node.index();
        if idx >= self.values.len() {
            let slots = idx
                .checked_add(1)
                .and_then(|len| len.checked_sub(self.values.len()));
            match slots.map(|extra| self.values.try_reserve_exact(extra)) {
                Some(Ok(())) => self.values.resize_with(idx + 1, || None),
                _ => panic!("no room to attach a value to {}", node),
            }
        }
        let previous = self.values[idx].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.values.get(node.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.values.get_mut(node.index()).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        let removed = self.values.get_mut(node.index()).and_then(Option::take);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Number of nodes carrying a value
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Values in ascending node order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(idx, value)| value.as_ref().map(|v| (NodeId::from_index(idx), v)))
    }
}

impl<T> Default for NodeData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeData<T> {
    type Output = T;

    /// Panics if the node has no value
    fn index(&self, node: NodeId) -> &T {
        match self.get(node) {
            Some(value) => value,
            None => panic!("no value attached to {}", node),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeData<T> {
    fn index_mut(&mut self, node: NodeId) -> &mut T {
        match self.get_mut(node) {
            Some(value) => value,
            None => panic!("no value attached to {}", node),
        }
    }
}

impl<T> FromIterator<(NodeId, T)> for NodeData<T> {
    fn from_iter<I: IntoIterator<Item = (NodeId, T)>>(iter: I) -> Self {
        let mut data = NodeData::new();
        for (node, value) in iter {
            data.insert(node, value);
        }
        data
    }
}
