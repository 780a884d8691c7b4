//! Directed edge between two canvas nodes.
//!
//! # Invariants
//! - `source` and `target` must reference existing node ids at
//!   creation time; the session controller validates this on connect.
//! - The store does not enforce referential integrity afterwards; node
//!   deletion cascades through the session controller.

use crate::model::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed link between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,
}

impl Edge {
    /// Creates the edge a user-drawn connection produces: fresh id,
    /// animated, no style override.
    pub fn connecting(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: fresh_edge_id(),
            source: source.into(),
            target: target.into(),
            animated: true,
            style: None,
        }
    }

    /// Returns whether this edge starts or ends at `node_id`.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Synthesizes a globally unique edge id.
pub fn fresh_edge_id() -> String {
    format!("edge_{}", Uuid::new_v4())
}
