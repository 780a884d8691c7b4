//! Flow slot-store contract and SQLite implementation.
//!
//! # Responsibility
//! - Serialize the full flow document to one text value per slot key.
//! - Keep slot-key derivation in one place.
//!
//! # Invariants
//! - Slot keys are namespaced as `mindcanvas-flow-{projectId|default}`.
//! - A load never returns a partially decoded document: absent slot is
//!   `None`, malformed text is `PersistError::Deserialization`.

use crate::db::DbError;
use crate::model::flow::FlowDocument;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SLOT_KEY_PREFIX: &str = "mindcanvas-flow-";
const DEFAULT_PROJECT: &str = "default";

/// Derives the durable slot key for a project.
///
/// An absent or empty project id maps to the default namespace.
pub fn slot_key(project_id: Option<&str>) -> String {
    let project = match project_id {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_PROJECT,
    };
    format!("{SLOT_KEY_PREFIX}{project}")
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-layer error for flow save/load operations.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    /// The in-memory document could not be serialized.
    Serialize(serde_json::Error),
    /// Stored slot content is not a valid flow document.
    Deserialization {
        slot_key: String,
        message: String,
    },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize flow document: {err}"),
            Self::Deserialization { slot_key, message } => {
                write!(f, "corrupt flow document at `{slot_key}`: {message}")
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Deserialization { .. } => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Keyed durable-slot contract for flow documents.
pub trait FlowStore {
    /// Writes the document under the project's slot, overwriting any
    /// prior value.
    fn save(&self, project_id: Option<&str>, document: &FlowDocument) -> PersistResult<()>;

    /// Reads the project's slot. `None` when the slot has never been
    /// written.
    fn load(&self, project_id: Option<&str>) -> PersistResult<Option<FlowDocument>>;
}

/// SQLite-backed flow slot store.
pub struct SqliteFlowStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFlowStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FlowStore for SqliteFlowStore<'_> {
    fn save(&self, project_id: Option<&str>, document: &FlowDocument) -> PersistResult<()> {
        let key = slot_key(project_id);
        let text = serde_json::to_string(document).map_err(PersistError::Serialize)?;

        self.conn.execute(
            "INSERT INTO flows (slot_key, document, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot_key) DO UPDATE SET
                document = excluded.document,
                updated_at = excluded.updated_at;",
            params![key, text],
        )?;

        info!(
            "event=flow_save module=persist status=ok slot_key={key} nodes={} edges={}",
            document.nodes.len(),
            document.edges.len()
        );
        Ok(())
    }

    fn load(&self, project_id: Option<&str>) -> PersistResult<Option<FlowDocument>> {
        let key = slot_key(project_id);

        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM flows WHERE slot_key = ?1;",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(text) = stored else {
            info!("event=flow_load module=persist status=absent slot_key={key}");
            return Ok(None);
        };

        let document: FlowDocument = serde_json::from_str(&text).map_err(|err| {
            warn!("event=flow_load module=persist status=error slot_key={key} error={err}");
            PersistError::Deserialization {
                slot_key: key.clone(),
                message: err.to_string(),
            }
        })?;

        info!(
            "event=flow_load module=persist status=ok slot_key={key} nodes={} edges={}",
            document.nodes.len(),
            document.edges.len()
        );
        Ok(Some(document))
    }
}
