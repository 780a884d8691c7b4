//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one seeded editing session end to end (drop, delete, undo,
//!   save, load) to verify `mindcanvas_core` wiring without a UI host.
//! - Keep output deterministic for quick local sanity checks.

use mindcanvas_core::db::open_db_in_memory;
use mindcanvas_core::{
    default_log_level, init_logging, EditorSession, Position, SqliteFlowStore,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("mindcanvas-logs");
    init_logging(default_log_level(), &log_dir.to_string_lossy())?;

    println!("mindcanvas_core version={}", mindcanvas_core::core_version());

    let mut session = EditorSession::with_seed_graph();
    println!(
        "seed nodes={} edges={}",
        session.store().node_count(),
        session.store().edge_count()
    );

    let dropped = session
        .drop_at("taskNode", Position::new(320.0, 240.0))
        .ok_or("drop should create a node")?;
    session.select_node(&dropped);
    session.delete_key_pressed(false);
    session.undo_delete();
    println!(
        "after drop+delete+undo nodes={} edges={}",
        session.store().node_count(),
        session.store().edge_count()
    );

    let conn = open_db_in_memory()?;
    let store = SqliteFlowStore::new(&conn);
    session.save_flow(&store, Some("smoke"))?;

    let mut restored = EditorSession::new();
    let loaded = restored.load_flow(&store, Some("smoke"))?;
    println!(
        "round trip loaded={} nodes={} edges={}",
        loaded,
        restored.store().node_count(),
        restored.store().edge_count()
    );

    Ok(())
}
