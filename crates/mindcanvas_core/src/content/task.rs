//! Task variant: progress tracking.

use crate::model::payload::{ContentPayload, TaskPayload, TaskPriority};

/// Uncommitted edit state for a task node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub content: String,
    pub is_completed: bool,
    pub due_date: Option<String>,
    pub priority: TaskPriority,
}

impl TaskDraft {
    /// Copies the committed payload into local form state.
    pub fn edit(payload: &TaskPayload) -> Self {
        Self {
            content: payload.content.clone(),
            is_completed: payload.is_completed,
            due_date: payload.due_date.clone(),
            priority: payload.priority,
        }
    }

    /// Emits the committed payload.
    pub fn save(self) -> ContentPayload {
        ContentPayload::Task(TaskPayload {
            content: self.content,
            is_completed: self.is_completed,
            due_date: self.due_date,
            priority: self.priority,
        })
    }
}

/// Flips completion in place.
///
/// The inline view-mode checkbox commits directly, without entering
/// edit mode; everything but `is_completed` stays untouched.
pub fn toggle_completed(payload: &mut TaskPayload) {
    payload.is_completed = !payload.is_completed;
}
