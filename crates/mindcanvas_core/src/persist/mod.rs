//! Flow-document persistence layer.
//!
//! # Responsibility
//! - Define the keyed durable-slot contract for whole-document
//!   save/load.
//! - Isolate SQL and serialization details from session orchestration.
//!
//! # Invariants
//! - Save is a whole-document overwrite; there is no merge.
//! - Malformed stored content fails loudly instead of producing a
//!   partial graph.

pub mod flow_store;
