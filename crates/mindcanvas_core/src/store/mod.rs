//! In-memory node/edge store.
//!
//! # Responsibility
//! - Own the two ordered collections that are the single source of
//!   truth for one editing session.
//! - Provide total, synchronous mutation operations.
//!
//! # Invariants
//! - Insertion order is preserved; it carries no meaning beyond
//!   rendering/iteration order.
//! - Removal of an absent id is a silent no-op (idempotent delete).
//! - The store does not enforce edge referential integrity; the
//!   session controller cascades edge removal on node deletion.

use crate::model::edge::Edge;
use crate::model::node::Node;

/// Ordered node and edge collections for one editing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing collections (seed/load paths).
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Appends a node.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Removes the node with `id`. Absent ids are a no-op.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|node| node.id != id);
    }

    /// Appends an edge.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Removes every edge matching the predicate.
    pub fn remove_edges_matching(&mut self, mut matches: impl FnMut(&Edge) -> bool) {
        self.edges.retain(|edge| !matches(edge));
    }

    /// Mutates the node with `id` in place. Absent ids are a no-op.
    pub fn update_node(&mut self, id: &str, mutate: impl FnOnce(&mut Node)) {
        if let Some(node) = self.nodes.iter_mut().find(|node| node.id == id) {
            mutate(node);
        }
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns whether a node with `id` exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Snapshots every edge touching `node_id` (the cascade/undo set).
    pub fn edges_touching(&self, node_id: &str) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.touches(node_id))
            .cloned()
            .collect()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Mutable node iteration for selection-flag sync.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Replaces the full store content. Load-path operation; never a
    /// merge.
    pub fn replace(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes;
        self.edges = edges;
    }
}
