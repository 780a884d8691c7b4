use mindcanvas_core::{
    ContentPayload, EditorSession, NoticeAction, NoticeKind, Position, TaskPriority, Viewport,
    DELETE_NOTICE_TTL, UNDO_NOTICE_TTL,
};
use std::collections::BTreeSet;

fn node_ids(session: &EditorSession) -> BTreeSet<String> {
    session
        .store()
        .nodes()
        .iter()
        .map(|n| n.id.clone())
        .collect()
}

fn edge_ids(session: &EditorSession) -> BTreeSet<String> {
    session
        .store()
        .edges()
        .iter()
        .map(|e| e.id.clone())
        .collect()
}

#[test]
fn drop_recognized_tag_adds_one_node_with_defaults() {
    let mut session = EditorSession::new();
    session.set_viewport(Viewport::new(100.0, 50.0, 2.0));

    let id = session
        .drop_at("taskNode", Position::new(300.0, 250.0))
        .unwrap();

    assert_eq!(session.store().node_count(), 1);
    let node = session.store().node(&id).unwrap();
    assert_eq!(node.position, Position::new(100.0, 100.0));

    match &node.data {
        ContentPayload::Task(task) => {
            assert_eq!(task.content, "New task");
            assert!(!task.is_completed);
            assert_eq!(task.due_date, None);
            assert_eq!(task.priority, TaskPriority::Medium);
        }
        other => panic!("expected task payload, got {other:?}"),
    }
}

#[test]
fn drop_unrecognized_tag_mutates_nothing() {
    let mut session = EditorSession::new();

    assert_eq!(session.drop_at("widgetNode", Position::new(0.0, 0.0)), None);
    assert_eq!(session.store().node_count(), 0);
    assert!(session.notice().is_none());
}

#[test]
fn drop_clears_pending_drag() {
    let mut session = EditorSession::new();
    session.begin_drag(mindcanvas_core::NodeKind::Note);
    assert!(session.pending_drag().is_some());

    session.drop_at("noteNode", Position::new(5.0, 5.0)).unwrap();
    assert!(session.pending_drag().is_none());
}

#[test]
fn dropped_nodes_get_unique_ids() {
    let mut session = EditorSession::new();
    let first = session.drop_at("noteNode", Position::new(0.0, 0.0)).unwrap();
    let second = session.drop_at("noteNode", Position::new(0.0, 0.0)).unwrap();
    assert_ne!(first, second);
}

#[test]
fn selection_is_single_and_cleared_by_canvas_click() {
    let mut session = EditorSession::with_seed_graph();

    session.select_node("main");
    session.select_node("features");

    assert_eq!(session.selected(), Some("features"));
    let selected: Vec<&str> = session
        .store()
        .nodes()
        .iter()
        .filter(|n| n.selected)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(selected, vec!["features"]);

    session.click_canvas();
    assert_eq!(session.selected(), None);
    assert!(session.store().nodes().iter().all(|n| !n.selected));
}

#[test]
fn selecting_absent_node_is_noop() {
    let mut session = EditorSession::with_seed_graph();
    session.select_node("main");

    session.select_node("missing");
    assert_eq!(session.selected(), Some("main"));
}

#[test]
fn connect_requires_existing_endpoints() {
    let mut session = EditorSession::with_seed_graph();
    let before = session.store().edge_count();

    assert!(session.connect("main", "missing").is_none());
    assert!(session.connect("missing", "main").is_none());
    assert_eq!(session.store().edge_count(), before);

    let edge_id = session.connect("tips", "chart-example").unwrap();
    assert_eq!(session.store().edge_count(), before + 1);
    let edge = session
        .store()
        .edges()
        .iter()
        .find(|e| e.id == edge_id)
        .unwrap();
    assert!(edge.animated);
}

#[test]
fn mouse_delete_requires_armed_confirmation() {
    let mut session = EditorSession::with_seed_graph();

    // Nothing selected: the dialog cannot even be armed.
    assert!(!session.request_delete());
    assert_eq!(session.confirm_delete(), None);

    session.select_node("tips");
    assert!(session.request_delete());
    assert!(session.delete_confirm_armed());

    session.cancel_delete();
    assert_eq!(session.confirm_delete(), None);
    assert!(session.store().contains_node("tips"));

    session.request_delete();
    assert_eq!(session.confirm_delete().as_deref(), Some("tips"));
    assert!(!session.store().contains_node("tips"));
}

#[test]
fn canvas_click_disarms_pending_confirmation() {
    let mut session = EditorSession::with_seed_graph();
    session.select_node("tips");
    session.request_delete();

    session.click_canvas();
    assert!(!session.delete_confirm_armed());
    assert_eq!(session.confirm_delete(), None);
}

#[test]
fn keyboard_delete_bypasses_confirmation_but_respects_text_focus() {
    let mut session = EditorSession::with_seed_graph();

    // No selection: keypress does nothing.
    assert_eq!(session.delete_key_pressed(false), None);

    session.select_node("tips");
    assert_eq!(session.delete_key_pressed(true), None);
    assert!(session.store().contains_node("tips"));

    assert_eq!(session.delete_key_pressed(false).as_deref(), Some("tips"));
    assert!(!session.store().contains_node("tips"));
}

#[test]
fn delete_cascades_edges_and_clears_selection() {
    let mut session = EditorSession::with_seed_graph();
    session.select_node("features");
    let touching = session.store().edges_touching("features").len();
    assert!(touching > 0);
    let edges_before = session.store().edge_count();

    session.delete_node("features").unwrap();

    assert!(!session.store().contains_node("features"));
    assert_eq!(session.store().edge_count(), edges_before - touching);
    assert_eq!(session.selected(), None);

    let snapshot = session.last_deleted().unwrap();
    assert_eq!(snapshot.node.id, "features");
    assert_eq!(snapshot.edges.len(), touching);
}

#[test]
fn delete_notice_offers_undo_with_five_second_ttl() {
    let mut session = EditorSession::with_seed_graph();
    session.delete_node("tips").unwrap();

    let notice = session.notice().unwrap();
    assert_eq!(notice.message, "Note node deleted");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.action, Some(NoticeAction::Undo));
    assert_eq!(notice.ttl, DELETE_NOTICE_TTL);
}

#[test]
fn undo_restores_graph_to_pre_delete_state() {
    let mut session = EditorSession::with_seed_graph();
    let nodes_before = node_ids(&session);
    let edges_before = edge_ids(&session);

    session.delete_node("features").unwrap();
    assert!(session.undo_delete());

    assert_eq!(node_ids(&session), nodes_before);
    assert_eq!(edge_ids(&session), edges_before);
    assert!(session.last_deleted().is_none());

    let notice = session.notice().unwrap();
    assert_eq!(notice.message, "Node restored successfully");
    assert_eq!(notice.action, None);
    assert_eq!(notice.ttl, UNDO_NOTICE_TTL);
}

#[test]
fn undo_with_empty_slot_returns_false() {
    let mut session = EditorSession::with_seed_graph();
    assert!(!session.undo_delete());

    session.delete_node("tips").unwrap();
    assert!(session.undo_delete());
    assert!(!session.undo_delete());
}

#[test]
fn second_delete_overwrites_undo_slot() {
    let mut session = EditorSession::with_seed_graph();

    session.delete_node("tips").unwrap();
    session.delete_node("notes-example").unwrap();

    assert!(session.undo_delete());

    // Only the second deletion is recoverable.
    assert!(session.store().contains_node("notes-example"));
    assert!(!session.store().contains_node("tips"));
    assert!(!session.undo_delete());
}

#[test]
fn stale_notice_timer_cannot_clear_newer_notice() {
    let mut session = EditorSession::with_seed_graph();

    session.delete_node("tips").unwrap();
    let delete_notice_id = session.notice().unwrap().id;

    session.undo_delete();
    let undo_notice_id = session.notice().unwrap().id;
    assert_ne!(delete_notice_id, undo_notice_id);

    // The delete notice's timer fires after being superseded.
    session.expire_notice(delete_notice_id);
    assert!(session.notice().is_some());

    session.expire_notice(undo_notice_id);
    assert!(session.notice().is_none());
}

#[test]
fn payload_update_commits_only_through_save_path() {
    let mut session = EditorSession::with_seed_graph();

    let ContentPayload::Task(task) = session.store().node("tasks-example").unwrap().data.clone()
    else {
        panic!("seed task node should carry a task payload");
    };

    let mut draft = mindcanvas_core::TaskDraft::edit(&task);
    draft.content = "Revised task".to_string();
    // Draft not saved yet: the store is unchanged.
    match &session.store().node("tasks-example").unwrap().data {
        ContentPayload::Task(stored) => assert_eq!(stored.content, task.content),
        other => panic!("unexpected payload {other:?}"),
    }

    session.update_node_payload("tasks-example", draft.save());
    match &session.store().node("tasks-example").unwrap().data {
        ContentPayload::Task(stored) => assert_eq!(stored.content, "Revised task"),
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn move_node_updates_position() {
    let mut session = EditorSession::with_seed_graph();
    session.move_node("main", Position::new(1.0, 2.0));
    assert_eq!(
        session.store().node("main").unwrap().position,
        Position::new(1.0, 2.0)
    );
}
