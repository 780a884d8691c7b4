use mindcanvas_core::{
    ContentPayload, EditorSession, Edge, GraphStore, Node, NodeKind, Position,
};
use std::collections::HashSet;

fn node(id: &str, kind: NodeKind) -> Node {
    Node::with_id(
        id,
        kind,
        Position::new(0.0, 0.0),
        ContentPayload::default_for(kind),
    )
}

fn assert_no_dangling_edges(store: &GraphStore) {
    let ids: HashSet<&str> = store.nodes().iter().map(|n| n.id.as_str()).collect();
    for edge in store.edges() {
        assert!(
            ids.contains(edge.source.as_str()) && ids.contains(edge.target.as_str()),
            "edge {} references a missing node",
            edge.id
        );
    }
}

#[test]
fn add_and_remove_node_roundtrip() {
    let mut store = GraphStore::new();
    store.add_node(node("a", NodeKind::Note));

    assert!(store.contains_node("a"));
    assert_eq!(store.node_count(), 1);

    store.remove_node("a");
    assert!(!store.contains_node("a"));
    assert_eq!(store.node_count(), 0);
}

#[test]
fn remove_absent_node_is_silent_noop() {
    let mut store = GraphStore::new();
    store.add_node(node("a", NodeKind::Task));

    store.remove_node("missing");
    store.remove_node("missing");
    assert_eq!(store.node_count(), 1);
}

#[test]
fn update_absent_node_is_noop() {
    let mut store = GraphStore::new();
    store.update_node("missing", |n| n.selected = true);
    assert_eq!(store.node_count(), 0);
}

#[test]
fn update_node_mutates_in_place() {
    let mut store = GraphStore::new();
    store.add_node(node("a", NodeKind::Note));

    store.update_node("a", |n| n.position = Position::new(10.0, 20.0));
    assert_eq!(store.node("a").unwrap().position, Position::new(10.0, 20.0));
}

#[test]
fn insertion_order_is_preserved() {
    let mut store = GraphStore::new();
    store.add_node(node("c", NodeKind::Note));
    store.add_node(node("a", NodeKind::Task));
    store.add_node(node("b", NodeKind::Chart));

    let order: Vec<&str> = store.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
}

#[test]
fn remove_edges_matching_filters_by_predicate() {
    let mut store = GraphStore::new();
    store.add_node(node("a", NodeKind::Note));
    store.add_node(node("b", NodeKind::Note));
    store.add_node(node("c", NodeKind::Note));
    store.add_edge(Edge::connecting("a", "b"));
    store.add_edge(Edge::connecting("b", "c"));
    store.add_edge(Edge::connecting("a", "c"));

    store.remove_edges_matching(|edge| edge.touches("b"));

    assert_eq!(store.edge_count(), 1);
    assert_eq!(store.edges()[0].source, "a");
    assert_eq!(store.edges()[0].target, "c");
}

#[test]
fn edges_touching_captures_both_directions() {
    let mut store = GraphStore::new();
    store.add_node(node("a", NodeKind::Note));
    store.add_node(node("b", NodeKind::Note));
    store.add_node(node("c", NodeKind::Note));
    store.add_edge(Edge::connecting("a", "b"));
    store.add_edge(Edge::connecting("c", "b"));
    store.add_edge(Edge::connecting("a", "c"));

    let touching = store.edges_touching("b");
    assert_eq!(touching.len(), 2);
    assert!(touching.iter().all(|edge| edge.touches("b")));
}

#[test]
fn controller_sequences_never_leave_dangling_edges() {
    let mut session = EditorSession::with_seed_graph();
    assert_no_dangling_edges(session.store());

    let dropped = session
        .drop_at("noteNode", Position::new(10.0, 10.0))
        .unwrap();
    session.connect(&dropped, "main").unwrap();
    assert_no_dangling_edges(session.store());

    // Deleting a hub node must cascade every touching edge.
    session.delete_node("features").unwrap();
    assert_no_dangling_edges(session.store());

    session.delete_node("main").unwrap();
    assert_no_dangling_edges(session.store());

    session.undo_delete();
    assert_no_dangling_edges(session.store());

    session.delete_node(&dropped).unwrap();
    assert_no_dangling_edges(session.store());
}
