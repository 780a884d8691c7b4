//! Note variant: free-form text.

use crate::model::payload::{ContentPayload, NotePayload};

/// Uncommitted edit state for a note node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub content: String,
}

impl NoteDraft {
    /// Copies the committed payload into local form state.
    pub fn edit(payload: &NotePayload) -> Self {
        Self {
            content: payload.content.clone(),
        }
    }

    /// Emits the committed payload. Dropping the draft instead
    /// discards the edit.
    pub fn save(self) -> ContentPayload {
        ContentPayload::Note(NotePayload {
            content: self.content,
        })
    }
}
