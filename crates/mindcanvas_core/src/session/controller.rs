//! Editing-session controller.
//!
//! # Responsibility
//! - Drive the selection / drag-pending / delete-confirm state machine
//!   over the graph store.
//! - Own the one-slot delete undo and the save/load glue.
//!
//! # Invariants
//! - At most one node is selected at a time.
//! - Deleting a node removes every edge touching it in the same step.
//! - `last_deleted` holds at most one snapshot; a second delete
//!   overwrites it and the first deletion becomes unrecoverable.
//! - Load replaces the whole store content and requests a view re-fit.

use crate::model::edge::Edge;
use crate::model::flow::{FlowDocument, Viewport};
use crate::model::node::{Node, NodeId, NodeKind, Position};
use crate::model::payload::ContentPayload;
use crate::persist::flow_store::{FlowStore, PersistResult};
use crate::session::notify::{
    Notice, NoticeAction, NoticeKind, DELETE_NOTICE_TTL, UNDO_NOTICE_TTL,
};
use crate::store::GraphStore;
use log::{info, warn};
use std::time::Duration;

/// Captured state of the most recent deletion, for single-level undo.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedSnapshot {
    pub node: Node,
    pub edges: Vec<Edge>,
}

/// One in-memory editing instance of a graph.
#[derive(Debug, Default)]
pub struct EditorSession {
    store: GraphStore,
    viewport: Viewport,
    selected: Option<NodeId>,
    pending_drag: Option<NodeKind>,
    delete_confirm_armed: bool,
    last_deleted: Option<DeletedSnapshot>,
    notice: Option<Notice>,
    notice_seq: u64,
    view_fit_requested: bool,
}

impl EditorSession {
    /// Starts a session over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from an existing document (seed/import paths).
    pub fn from_document(document: FlowDocument) -> Self {
        Self {
            store: GraphStore::from_parts(document.nodes, document.edges),
            viewport: document.viewport,
            ..Self::default()
        }
    }

    /// Starts a session from the bundled starter graph.
    pub fn with_seed_graph() -> Self {
        Self::from_document(crate::seed::seed_document())
    }

    // --- selection -------------------------------------------------

    /// Handles a click on a node.
    ///
    /// Clicking an absent id is a no-op; otherwise the clicked node
    /// becomes the single selection, replacing any previous one.
    pub fn select_node(&mut self, id: &str) {
        if !self.store.contains_node(id) {
            return;
        }
        self.selected = Some(id.to_string());
        for node in self.store.nodes_mut() {
            node.selected = node.id == id;
        }
    }

    /// Handles a click on empty canvas: clears the selection and any
    /// pending delete confirmation.
    pub fn click_canvas(&mut self) {
        self.selected = None;
        self.delete_confirm_armed = false;
        for node in self.store.nodes_mut() {
            node.selected = false;
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // --- creation --------------------------------------------------

    /// Palette drag-start: remember the requested type.
    pub fn begin_drag(&mut self, kind: NodeKind) {
        self.pending_drag = Some(kind);
    }

    /// Drag ended without a drop.
    pub fn end_drag(&mut self) {
        self.pending_drag = None;
    }

    pub fn pending_drag(&self) -> Option<NodeKind> {
        self.pending_drag
    }

    /// Handles a drop on the canvas.
    ///
    /// The drop carries the palette's type tag; an unrecognized tag
    /// mutates nothing. The screen-space pointer position is projected
    /// into canvas space through the current viewport, and the new
    /// node gets a fresh id and the kind's default payload.
    pub fn drop_at(&mut self, type_tag: &str, screen: Position) -> Option<NodeId> {
        self.pending_drag = None;

        let Some(kind) = NodeKind::from_tag(type_tag) else {
            warn!("event=node_drop module=session status=ignored reason=unrecognized_tag tag={type_tag}");
            return None;
        };

        let node = Node::new(kind, self.viewport.project(screen));
        let id = node.id.clone();
        self.store.add_node(node);
        info!(
            "event=node_drop module=session status=ok kind={} node_id={id}",
            kind.tag()
        );
        Some(id)
    }

    /// Handles the renderer's connect callback.
    ///
    /// Both endpoints must exist; a dangling endpoint makes this a
    /// no-op returning `None`.
    pub fn connect(&mut self, source: &str, target: &str) -> Option<String> {
        if !self.store.contains_node(source) || !self.store.contains_node(target) {
            warn!(
                "event=edge_connect module=session status=ignored reason=unknown_endpoint source={source} target={target}"
            );
            return None;
        }
        let edge = Edge::connecting(source, target);
        let id = edge.id.clone();
        self.store.add_edge(edge);
        info!("event=edge_connect module=session status=ok edge_id={id}");
        Some(id)
    }

    // --- mutation callbacks ---------------------------------------

    /// Content-variant save path (`onChange`): commits an edited
    /// payload back into the store.
    pub fn update_node_payload(&mut self, id: &str, payload: ContentPayload) {
        self.store.update_node(id, |node| node.data = payload);
    }

    /// Renderer position-mutation callback (drag physics).
    pub fn move_node(&mut self, id: &str, position: Position) {
        self.store.update_node(id, |node| node.position = position);
    }

    // --- deletion --------------------------------------------------

    /// Mouse path: arms the confirm dialog for the selected node.
    ///
    /// Returns `false` without a selection.
    pub fn request_delete(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.delete_confirm_armed = true;
        true
    }

    /// Dismisses the armed confirm dialog.
    pub fn cancel_delete(&mut self) {
        self.delete_confirm_armed = false;
    }

    pub fn delete_confirm_armed(&self) -> bool {
        self.delete_confirm_armed
    }

    /// Mouse path: performs the armed deletion.
    pub fn confirm_delete(&mut self) -> Option<NodeId> {
        if !self.delete_confirm_armed {
            return None;
        }
        self.delete_confirm_armed = false;
        let id = self.selected.clone()?;
        self.delete_node(&id)
    }

    /// Keyboard path: deletes the selected node without confirmation.
    ///
    /// Ignored while keyboard focus is inside a text input, so typing
    /// Backspace in a form never destroys a node.
    pub fn delete_key_pressed(&mut self, focus_in_text_input: bool) -> Option<NodeId> {
        if focus_in_text_input {
            return None;
        }
        let id = self.selected.clone()?;
        self.delete_node(&id)
    }

    /// Deletes `id`, cascading edge removal and capturing the undo
    /// snapshot.
    pub fn delete_node(&mut self, id: &str) -> Option<NodeId> {
        let node = self.store.node(id)?.clone();
        let edges = self.store.edges_touching(id);

        self.store.remove_node(id);
        self.store.remove_edges_matching(|edge| edge.touches(id));

        // Overwrites any prior snapshot: undo is single-level.
        self.last_deleted = Some(DeletedSnapshot {
            node: node.clone(),
            edges,
        });

        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.delete_confirm_armed = false;

        info!(
            "event=node_delete module=session status=ok kind={} node_id={id}",
            node.kind.tag()
        );
        self.push_notice(
            format!("{} node deleted", node.kind.display_name()),
            NoticeKind::Success,
            Some(NoticeAction::Undo),
            DELETE_NOTICE_TTL,
        );
        Some(node.id)
    }

    /// Restores the last deleted node and its edges in one step.
    ///
    /// Returns `false` when the undo slot is empty.
    pub fn undo_delete(&mut self) -> bool {
        let Some(snapshot) = self.last_deleted.take() else {
            return false;
        };

        let node_id = snapshot.node.id.clone();
        self.store.add_node(snapshot.node);
        for edge in snapshot.edges {
            self.store.add_edge(edge);
        }

        info!("event=node_restore module=session status=ok node_id={node_id}");
        self.push_notice(
            "Node restored successfully".to_string(),
            NoticeKind::Success,
            None,
            UNDO_NOTICE_TTL,
        );
        true
    }

    pub fn last_deleted(&self) -> Option<&DeletedSnapshot> {
        self.last_deleted.as_ref()
    }

    // --- notifications --------------------------------------------

    /// Active notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Timer-expiry callback.
    ///
    /// Clears the notice only when `id` still matches, so a timer
    /// scheduled for a superseded notice cannot clear a newer one.
    pub fn expire_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
        }
    }

    fn push_notice(
        &mut self,
        message: String,
        kind: NoticeKind,
        action: Option<NoticeAction>,
        ttl: Duration,
    ) -> u64 {
        self.notice_seq += 1;
        let id = self.notice_seq;
        self.notice = Some(Notice {
            id,
            message,
            kind,
            action,
            ttl,
        });
        id
    }

    // --- persistence ----------------------------------------------

    /// Saves the full session snapshot under the project's slot.
    pub fn save_flow(&self, store: &impl FlowStore, project_id: Option<&str>) -> PersistResult<()> {
        let document = FlowDocument {
            nodes: self.store.nodes().to_vec(),
            edges: self.store.edges().to_vec(),
            viewport: self.viewport,
        };
        store.save(project_id, &document)
    }

    /// Loads the project's slot, replacing the whole store content.
    ///
    /// Returns `Ok(false)` when the slot has never been written; the
    /// in-memory graph is untouched on any failure. A successful load
    /// clears selection state and requests a view re-fit.
    pub fn load_flow(
        &mut self,
        store: &impl FlowStore,
        project_id: Option<&str>,
    ) -> PersistResult<bool> {
        let Some(document) = store.load(project_id)? else {
            return Ok(false);
        };

        self.store.replace(document.nodes, document.edges);
        self.viewport = document.viewport;
        self.selected = None;
        self.delete_confirm_armed = false;
        self.view_fit_requested = true;
        Ok(true)
    }

    /// Consumes the pending fit-view request set by a successful load.
    pub fn take_view_fit_request(&mut self) -> bool {
        std::mem::take(&mut self.view_fit_requested)
    }

    // --- accessors -------------------------------------------------

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Renderer pan/zoom callback.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
