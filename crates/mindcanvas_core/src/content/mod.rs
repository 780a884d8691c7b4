//! Content node variant contracts.
//!
//! # Responsibility
//! - Provide each variant's edit/view/save surface: draft types for
//!   local form state, committed payload emission, and the derived
//!   view models the rendering collaborator consumes.
//!
//! # Invariants
//! - Drafts are local and uncommitted; dropping one without `save`
//!   discards the edit.
//! - `save` is the only path by which edited content re-enters the
//!   store (through the session's payload-update callback).
//! - View derivation is side-effect free and never fails; malformed
//!   input degrades (NaN series values, placeholder media) instead.

pub mod chart;
pub mod media;
pub mod note;
pub mod task;

use crate::content::chart::{derive_series, SeriesPoint};
use crate::content::media::{resolve_source, MediaSource};
use crate::model::payload::{ChartKind, ContentPayload, TaskPriority};

/// Render-ready projection of a node's payload.
///
/// This is the view-mode representation handed to the rendering
/// collaborator; it owns no rendering itself.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeView {
    Note {
        content: String,
    },
    Task {
        content: String,
        completed: bool,
        due_date: Option<String>,
        priority: TaskPriority,
    },
    Media {
        title: String,
        source: MediaSource,
    },
    Chart {
        title: String,
        chart_type: ChartKind,
        series: Vec<SeriesPoint>,
    },
}

/// Derives the view-mode representation of a payload.
pub fn view(payload: &ContentPayload) -> NodeView {
    match payload {
        ContentPayload::Note(note) => NodeView::Note {
            content: note.content.clone(),
        },
        ContentPayload::Task(task) => NodeView::Task {
            content: task.content.clone(),
            completed: task.is_completed,
            due_date: task.due_date.clone(),
            priority: task.priority,
        },
        ContentPayload::Media(media) => NodeView::Media {
            title: media.title.clone(),
            source: resolve_source(media),
        },
        ContentPayload::Chart(chart) => NodeView::Chart {
            title: chart.title.clone(),
            chart_type: chart.chart_type,
            series: derive_series(chart),
        },
    }
}
