//! In-memory graph storage implementation
//!
//! Nodes and edges live in append-only arenas addressed by dense ids. Each
//! node keeps an adjacency list of edge ids:
//! - Directed: `outgoing[u]` holds edges leaving u, `incoming[v]` edges entering v
//! - Undirected: `outgoing[u]` holds every edge incident to u (a self-loop once)

use super::edge::{Edge, DEFAULT_WEIGHT};
use super::types::{EdgeId, GraphMode, NodeId};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("Operation requires a {expected} graph, but this graph is {actual}")]
    ModeMismatch {
        expected: GraphMode,
        actual: GraphMode,
    },

    #[error("Graph contains a cycle through edge {from} -> {to}")]
    CycleDetected { from: NodeId, to: NodeId },

    #[error("Inconsistent adjacency: {0}")]
    InconsistentAdjacency(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Construction options for [`Graph`]
#[derive(Debug, Clone, Default)]
pub struct GraphConfig {
    pub mode: GraphMode,
    /// Expected number of nodes, used to pre-size storage
    pub node_capacity: usize,
    /// Expected number of edges, used to pre-size storage
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new(mode: GraphMode) -> Self {
        GraphConfig {
            mode,
            ..Default::default()
        }
    }

    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }
}

/// In-memory graph
#[derive(Debug, Clone)]
pub struct Graph {
    mode: GraphMode,

    /// Edge storage (arena, EdgeId is the position)
    edges: Vec<Edge>,

    /// Outgoing (directed) or incident (undirected) edges for each node
    outgoing: Vec<Vec<EdgeId>>,

    /// Incoming edges for each node; always empty lists in undirected mode
    incoming: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(mode: GraphMode) -> Self {
        Self::with_config(GraphConfig::new(mode))
    }

    pub fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    /// Create a new empty graph with pre-sized storage
    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            mode: config.mode,
            edges: Vec::with_capacity(config.edge_capacity),
            outgoing: Vec::with_capacity(config.node_capacity),
            incoming: Vec::with_capacity(config.node_capacity),
        }
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    /// Create a node with the next free id
    pub fn add_node(&mut self) -> NodeId {
        let node_id = NodeId::from_index(self.outgoing.len());
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        node_id
    }

    /// Create an edge with the default weight
    ///
    /// See [`Graph::add_weighted_edge`] for how endpoints are validated.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> GraphResult<EdgeId> {
        self.add_weighted_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Create an edge with an explicit weight
    ///
    /// A `NodeId` is a dense index and carries no owner, so validation is a
    /// range check against `node_count()`. An id minted by another graph is
    /// rejected only when its index is out of range here; otherwise it names
    /// this graph's node at that index.
    pub fn add_weighted_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: i64,
    ) -> GraphResult<EdgeId> {
        // Validate nodes exist
        if !self.has_node(source) {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.has_node(target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }

        let edge_id = EdgeId::from_index(self.edges.len());
        self.edges
            .push(Edge::with_weight(edge_id, source, target, weight));

        // Update adjacency lists
        self.outgoing[source.index()].push(edge_id);
        match self.mode {
            GraphMode::Directed => self.incoming[target.index()].push(edge_id),
            GraphMode::Undirected => {
                if source != target {
                    self.outgoing[target.index()].push(edge_id);
                }
            }
        }

        Ok(edge_id)
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.outgoing.len()
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Get total number of edges (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All node ids in creation order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.outgoing.len()).map(NodeId::from_index)
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving a node (directed) or touching it (undirected), O(degree)
    pub fn outgoing_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        self.resolve(self.outgoing.get(node_id.index()))
    }

    /// Edges entering a node (directed) or touching it (undirected), O(degree)
    pub fn incoming_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        match self.mode {
            GraphMode::Directed => self.resolve(self.incoming.get(node_id.index())),
            GraphMode::Undirected => self.outgoing_edges(node_id),
        }
    }

    /// Nodes reachable over one traversable edge, in edge insertion order
    pub fn neighbors(&self, node_id: NodeId) -> Vec<NodeId> {
        self.outgoing_edges(node_id)
            .into_iter()
            .filter_map(|edge| edge.other_end(node_id))
            .collect()
    }

    pub fn out_degree(&self, node_id: NodeId) -> usize {
        self.outgoing.get(node_id.index()).map_or(0, Vec::len)
    }

    fn resolve(&self, edge_ids: Option<&Vec<EdgeId>>) -> Vec<&Edge> {
        edge_ids
            .map(|ids| ids.iter().filter_map(|&id| self.get_edge(id)).collect())
            .unwrap_or_default()
    }

    /// Fail with `ModeMismatch` unless the graph has the expected mode
    pub(crate) fn require_mode(&self, expected: GraphMode) -> GraphResult<()> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(GraphError::ModeMismatch {
                expected,
                actual: self.mode,
            })
        }
    }

    /// Check that the adjacency index agrees with the edge arena
    ///
    /// Every adjacency entry must refer to a stored edge attached to that node,
    /// and every stored edge must be listed exactly where its mode says:
    /// directed edges once in `outgoing` and once in `incoming`, undirected
    /// edges once per distinct endpoint.
    pub fn verify(&self) -> GraphResult<()> {
        let inconsistent =
            |msg: String| -> GraphResult<()> { Err(GraphError::InconsistentAdjacency(msg)) };

        if self.incoming.len() != self.outgoing.len() {
            return inconsistent(format!(
                "{} outgoing lists but {} incoming lists",
                self.outgoing.len(),
                self.incoming.len()
            ));
        }

        let mut out_seen = vec![0usize; self.edges.len()];
        let mut in_seen = vec![0usize; self.edges.len()];

        for (idx, edge_ids) in self.outgoing.iter().enumerate() {
            let node = NodeId::from_index(idx);
            for &edge_id in edge_ids {
                let Some(edge) = self.get_edge(edge_id) else {
                    return inconsistent(format!("{} lists unknown {}", node, edge_id));
                };
                let attached = match self.mode {
                    GraphMode::Directed => edge.starts_from(node),
                    GraphMode::Undirected => edge.touches(node),
                };
                if !attached {
                    return inconsistent(format!(
                        "{} is listed at {} but is not attached to it",
                        edge_id, node
                    ));
                }
                out_seen[edge_id.index()] += 1;
            }
        }

        for (idx, edge_ids) in self.incoming.iter().enumerate() {
            let node = NodeId::from_index(idx);
            for &edge_id in edge_ids {
                let Some(edge) = self.get_edge(edge_id) else {
                    return inconsistent(format!("{} lists unknown incoming {}", node, edge_id));
                };
                if !self.is_directed() || !edge.ends_at(node) {
                    return inconsistent(format!("{} is listed as incoming at {}", edge_id, node));
                }
                in_seen[edge_id.index()] += 1;
            }
        }

        for (idx, edge) in self.edges.iter().enumerate() {
            if edge.id.index() != idx {
                return inconsistent(format!("{} stored at position {}", edge.id, idx));
            }
            if !self.has_node(edge.source) || !self.has_node(edge.target) {
                return inconsistent(format!("{} references a missing node", edge.id));
            }

            let (want_out, want_in) = match self.mode {
                GraphMode::Directed => (1, 1),
                GraphMode::Undirected if edge.is_self_loop() => (1, 0),
                GraphMode::Undirected => (2, 0),
            };
            if out_seen[idx] != want_out || in_seen[idx] != want_in {
                return inconsistent(format!(
                    "{} listed {} outgoing / {} incoming times, expected {} / {}",
                    edge.id, out_seen[idx], in_seen[idx], want_out, want_in
                ));
            }
        }

        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}
