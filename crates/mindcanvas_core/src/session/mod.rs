//! Graph-editing session orchestration.
//!
//! # Responsibility
//! - Mediate selection, drag-and-drop creation, deletion with one-slot
//!   undo, and persistence over the in-memory store.
//! - Own the transient notification state and its identity-checked
//!   expiry.
//!
//! # Invariants
//! - All operations are synchronous and event-driven; no two handlers
//!   run concurrently.
//! - Node deletion always cascades edge removal in the same step.

pub mod controller;
pub mod notify;
