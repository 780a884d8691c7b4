//! Typed content payloads carried by canvas nodes.
//!
//! # Responsibility
//! - Define the editable field set of each content variant.
//! - Provide the per-kind default payload used by drop creation.
//!
//! # Invariants
//! - Payloads serialize without a discriminant of their own; the
//!   node's `type` field is the external tag, matching the persisted
//!   document format.
//! - Chart data/labels stay raw comma-separated text; parsing happens
//!   in the chart view derivation, never on save.

use crate::model::node::NodeKind;
use serde::{Deserialize, Serialize};

/// Task urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Embedded media category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Chart plot style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Free-form text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub content: String,
}

/// Actionable task with completion and priority metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub content: String,
    pub is_completed: bool,
    /// ISO date text from the due-date input; absent when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub priority: TaskPriority,
}

/// Image or video embed reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

/// Small inline data visualization.
///
/// `chart_data` and `chart_labels` hold the user's raw comma-separated
/// input; [`crate::content::chart::derive_series`] pairs them up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub title: String,
    pub chart_type: ChartKind,
    pub chart_data: String,
    pub chart_labels: String,
}

/// Tagged union of every content variant.
///
/// Serialized untagged: the owning node's `type` field carries the
/// discriminant on the wire. Variant order matters for deserialization
/// and `Note` must stay last, since any payload carrying `content`
/// would otherwise match it first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPayload {
    Task(TaskPayload),
    Media(MediaPayload),
    Chart(ChartPayload),
    Note(NotePayload),
}

impl ContentPayload {
    /// Constructs the default payload a fresh drop of `kind` receives.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Note => Self::Note(NotePayload {
                content: "Enter your note here...".to_string(),
            }),
            NodeKind::Task => Self::Task(TaskPayload {
                content: "New task".to_string(),
                is_completed: false,
                due_date: None,
                priority: TaskPriority::Medium,
            }),
            NodeKind::Media => Self::Media(MediaPayload {
                title: "Media".to_string(),
                kind: MediaKind::Image,
                url: String::new(),
            }),
            NodeKind::Chart => Self::Chart(ChartPayload {
                title: "Chart".to_string(),
                chart_type: ChartKind::Bar,
                chart_data: "10,20,15,25,30".to_string(),
                chart_labels: "A,B,C,D,E".to_string(),
            }),
        }
    }

    /// Returns the node kind this payload belongs to.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Note(_) => NodeKind::Note,
            Self::Task(_) => NodeKind::Task,
            Self::Media(_) => NodeKind::Media,
            Self::Chart(_) => NodeKind::Chart,
        }
    }
}
