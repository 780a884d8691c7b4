//! Bundled starter graph for first-run sessions.
//!
//! One example node per content variant plus a few welcome notes,
//! wired together so new users see connections immediately.

use crate::model::edge::Edge;
use crate::model::flow::{FlowDocument, Viewport};
use crate::model::node::{Node, NodeKind, Position};
use crate::model::payload::{
    ChartKind, ChartPayload, ContentPayload, MediaKind, MediaPayload, NotePayload, TaskPayload,
    TaskPriority,
};
use serde_json::json;

const ACCENT_STROKE: &str = "#34D399";
const NEUTRAL_STROKE: &str = "#94A3B8";

/// Builds the starter document a fresh session is seeded with.
pub fn seed_document() -> FlowDocument {
    FlowDocument {
        nodes: seed_nodes(),
        edges: seed_edges(),
        viewport: Viewport::new(0.0, 0.0, 1.5),
    }
}

fn note(id: &str, x: f64, y: f64, content: &str) -> Node {
    Node::with_id(
        id,
        NodeKind::Note,
        Position::new(x, y),
        ContentPayload::Note(NotePayload {
            content: content.to_string(),
        }),
    )
}

fn seed_nodes() -> Vec<Node> {
    vec![
        note(
            "main",
            400.0,
            50.0,
            "Welcome to MindCanvas!\n\nDrag nodes around, connect them, and organize your thoughts visually.",
        ),
        note(
            "features",
            400.0,
            200.0,
            "Core Features\n\n- Create different node types\n- Connect related concepts\n- Save and load your maps",
        ),
        note(
            "getting-started",
            150.0,
            200.0,
            "Getting Started\n\n1. Explore the node types\n2. Connect related nodes\n3. Save your canvas",
        ),
        note(
            "tips",
            650.0,
            200.0,
            "Quick Tips\n\n- Drag from the palette to add nodes\n- Drag between handles to connect\n- Delete can be undone",
        ),
        note(
            "notes-example",
            150.0,
            350.0,
            "Notes\n\nUse note nodes for text content, ideas, and concepts.",
        ),
        Node::with_id(
            "tasks-example",
            NodeKind::Task,
            Position::new(400.0, 350.0),
            ContentPayload::Task(TaskPayload {
                content: "Create your first mind map".to_string(),
                is_completed: false,
                due_date: None,
                priority: TaskPriority::High,
            }),
        ),
        Node::with_id(
            "media-example",
            NodeKind::Media,
            Position::new(650.0, 350.0),
            ContentPayload::Media(MediaPayload {
                title: "Visual Thinking".to_string(),
                kind: MediaKind::Image,
                url: "https://via.placeholder.com/150/10B981/FFFFFF?text=MindCanvas".to_string(),
            }),
        ),
        Node::with_id(
            "chart-example",
            NodeKind::Chart,
            Position::new(400.0, 500.0),
            ContentPayload::Chart(ChartPayload {
                title: "Project Progress".to_string(),
                chart_type: ChartKind::Bar,
                chart_data: "80,65,45,30".to_string(),
                chart_labels: "Ideas,Planning,Execution,Review".to_string(),
            }),
        ),
    ]
}

fn edge(id: &str, source: &str, target: &str, animated: bool, stroke: &str) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        animated,
        style: Some(json!({ "stroke": stroke })),
    }
}

fn seed_edges() -> Vec<Edge> {
    vec![
        edge("e-main-features", "main", "features", true, ACCENT_STROKE),
        edge(
            "e-main-getting-started",
            "main",
            "getting-started",
            true,
            ACCENT_STROKE,
        ),
        edge("e-main-tips", "main", "tips", true, ACCENT_STROKE),
        edge(
            "e-features-notes",
            "features",
            "notes-example",
            false,
            NEUTRAL_STROKE,
        ),
        edge(
            "e-features-tasks",
            "features",
            "tasks-example",
            false,
            NEUTRAL_STROKE,
        ),
        edge(
            "e-features-media",
            "features",
            "media-example",
            false,
            NEUTRAL_STROKE,
        ),
        edge(
            "e-features-chart",
            "features",
            "chart-example",
            false,
            NEUTRAL_STROKE,
        ),
        edge(
            "e-getting-started-task",
            "getting-started",
            "tasks-example",
            false,
            NEUTRAL_STROKE,
        ),
    ]
}
