//! Canvas node record.
//!
//! # Responsibility
//! - Define the positioned, typed content unit placed on the canvas.
//! - Own id synthesis for freshly created nodes.
//!
//! # Invariants
//! - `id` is unique within one graph and never changes after creation.
//! - `kind` decides how `data` is interpreted; the store itself treats
//!   `data` opaquely.
//! - `style` is an opaque visual-override blob owned by the rendering
//!   collaborator.

use crate::model::payload::ContentPayload;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a canvas node.
///
/// Seeded and loaded graphs may carry arbitrary readable ids
/// (for example `"main"`); fresh nodes get a [`fresh_node_id`].
pub type NodeId = String;

/// Content variant tag for a canvas node.
///
/// The wire tags match the drag-and-drop payload strings and the
/// `type` field of persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "noteNode")]
    Note,
    #[serde(rename = "taskNode")]
    Task,
    #[serde(rename = "mediaNode")]
    Media,
    #[serde(rename = "chartNode")]
    Chart,
}

impl NodeKind {
    /// Parses a drag-and-drop payload tag.
    ///
    /// Returns `None` for unrecognized tags; callers treat that as a
    /// no-op drop.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "noteNode" => Some(Self::Note),
            "taskNode" => Some(Self::Task),
            "mediaNode" => Some(Self::Media),
            "chartNode" => Some(Self::Chart),
            _ => None,
        }
    }

    /// Returns the wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Note => "noteNode",
            Self::Task => "taskNode",
            Self::Media => "mediaNode",
            Self::Chart => "chartNode",
        }
    }

    /// Human-readable variant name used in notification messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Task => "Task",
            Self::Media => "Media",
            Self::Chart => "Chart",
        }
    }
}

/// Canvas-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A positioned, typed content unit on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: ContentPayload,
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,
}

impl Node {
    /// Creates a node with a fresh id and the kind's default payload.
    ///
    /// This is the drop-creation constructor: every palette drop goes
    /// through here.
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self::with_id(fresh_node_id(), kind, position, ContentPayload::default_for(kind))
    }

    /// Creates a node with a caller-provided id and payload.
    ///
    /// Used by seed graphs and load paths where identity already
    /// exists.
    pub fn with_id(
        id: impl Into<NodeId>,
        kind: NodeKind,
        position: Position,
        data: ContentPayload,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            data,
            selected: false,
            style: None,
        }
    }
}

/// Synthesizes a globally unique node id.
pub fn fresh_node_id() -> NodeId {
    format!("node_{}", Uuid::new_v4())
}
