//! Transient notification state.
//!
//! # Responsibility
//! - Model the toast the session shows after delete/undo, including
//!   the offered action and auto-clear delay.
//!
//! # Invariants
//! - Every notice carries a unique, monotonically increasing id.
//! - Expiry is identity-checked: a timer firing for a superseded
//!   notice must not clear a newer one, so callers expire by id, never
//!   by presence.

use std::time::Duration;

/// Auto-clear delay for the delete notice carrying the Undo offer.
pub const DELETE_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Auto-clear delay for the undo-completion notice.
pub const UNDO_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Visual category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Action a notice offers to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    Undo,
}

/// A transient toast message.
///
/// The session keeps at most one notice; pushing a new one supersedes
/// the old, and the stale timer becomes a no-op through the id check.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    pub action: Option<NoticeAction>,
    /// Delay after which the scheduling collaborator should call
    /// [`crate::session::controller::EditorSession::expire_notice`].
    pub ttl: Duration,
}
