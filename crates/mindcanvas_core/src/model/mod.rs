//! Canvas graph domain model.
//!
//! # Responsibility
//! - Define the node/edge records and typed content payloads the
//!   editing session mutates.
//! - Define the persisted flow-document shape and viewport math.
//!
//! # Invariants
//! - Every node and edge carries a stable string id, immutable once
//!   assigned.
//! - Wire field naming matches the persisted document format
//!   (`noteNode`-style type tags, camelCase payload fields).

pub mod edge;
pub mod flow;
pub mod node;
pub mod payload;
