//! Core graph-editing session logic for MindCanvas.
//! This crate is the single source of truth for canvas state and
//! persistence invariants; rendering, layout, and routing stay in
//! external collaborators.

pub mod content;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod seed;
pub mod session;
pub mod store;

pub use content::chart::{derive_series, ChartDraft, SeriesPoint};
pub use content::media::{
    extract_embed_id, resolve_source, MediaDraft, MediaSource, IMAGE_FALLBACK_ASSET,
};
pub use content::note::NoteDraft;
pub use content::task::{toggle_completed, TaskDraft};
pub use content::{view, NodeView};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::edge::{fresh_edge_id, Edge};
pub use model::flow::{FlowDocument, Viewport};
pub use model::node::{fresh_node_id, Node, NodeId, NodeKind, Position};
pub use model::payload::{
    ChartKind, ChartPayload, ContentPayload, MediaKind, MediaPayload, NotePayload, TaskPayload,
    TaskPriority,
};
pub use persist::flow_store::{slot_key, FlowStore, PersistError, PersistResult, SqliteFlowStore};
pub use session::controller::{DeletedSnapshot, EditorSession};
pub use session::notify::{Notice, NoticeAction, NoticeKind, DELETE_NOTICE_TTL, UNDO_NOTICE_TTL};
pub use store::GraphStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
