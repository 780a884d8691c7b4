//! Persisted flow document and viewport math.
//!
//! # Responsibility
//! - Define the whole-document snapshot written to a persistence slot.
//! - Project screen-space pointer coordinates into canvas space.
//!
//! # Invariants
//! - A document is saved and loaded as one unit; there is no partial
//!   merge.
//! - `zoom` is strictly positive; the rendering collaborator owns pan
//!   and zoom mutation and never produces a non-positive zoom.

use crate::model::edge::Edge;
use crate::model::node::{Node, Position};
use serde::{Deserialize, Serialize};

/// Pan/zoom state of the canvas view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self { x, y, zoom }
    }

    /// Maps a screen-space pointer position to canvas space.
    ///
    /// Inverse of the render transform: subtract the pan offset, then
    /// divide by zoom. Used to place dropped nodes under the pointer.
    pub fn project(&self, screen: Position) -> Position {
        Position {
            x: (screen.x - self.x) / self.zoom,
            y: (screen.y - self.y) / self.zoom,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// The serialized snapshot of a session's graph and viewport.
///
/// Missing collections in stored documents deserialize as empty, so a
/// document written by an older build still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub viewport: Viewport,
}
