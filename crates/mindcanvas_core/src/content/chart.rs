//! Chart variant: raw data entry and plotted-series derivation.
//!
//! # Invariants
//! - The series always has exactly one point per comma-separated
//!   value.
//! - Values that fail numeric parse propagate as `NaN`; the rendering
//!   collaborator owns degradation, the node never sanitizes.
//! - Value at index i takes label i when one exists, else the
//!   synthesized placeholder `Item {i+1}`.

use crate::model::payload::{ChartKind, ChartPayload, ContentPayload};

/// Uncommitted edit state for a chart node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDraft {
    pub title: String,
    pub chart_type: ChartKind,
    pub chart_data: String,
    pub chart_labels: String,
}

impl ChartDraft {
    /// Copies the committed payload into local form state.
    pub fn edit(payload: &ChartPayload) -> Self {
        Self {
            title: payload.title.clone(),
            chart_type: payload.chart_type,
            chart_data: payload.chart_data.clone(),
            chart_labels: payload.chart_labels.clone(),
        }
    }

    /// Emits the committed payload. Data and labels stay raw text.
    pub fn save(self) -> ContentPayload {
        ContentPayload::Chart(ChartPayload {
            title: self.title,
            chart_type: self.chart_type,
            chart_data: self.chart_data,
            chart_labels: self.chart_labels,
        })
    }
}

/// One labeled value of the plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Derives the plotted series by positional pairing of values and
/// labels.
pub fn derive_series(payload: &ChartPayload) -> Vec<SeriesPoint> {
    let labels: Vec<&str> = payload.chart_labels.split(',').map(str::trim).collect();

    payload
        .chart_data
        .split(',')
        .enumerate()
        .map(|(index, raw)| SeriesPoint {
            label: match labels.get(index) {
                Some(label) => (*label).to_string(),
                None => format!("Item {}", index + 1),
            },
            value: raw.trim().parse::<f64>().unwrap_or(f64::NAN),
        })
        .collect()
}
