pub mod migrations;
pub mod models;
pub mod queries;

use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use rusqlite::Connection;
use tracing::{info, warn};

use bloomback_types::{BloomError, StorageKind};

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        migrations::run(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database with the full schema. Used by tests and throwaway
    /// tooling; never by the server binary.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::run(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn with_conn<F, T>(&self, f: F) -> Result<T, BloomError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| {
            warn!("DB lock poisoned: {}", e);
            BloomError::Storage(StorageKind::Unavailable)
        })?;
        f(&conn).map_err(storage_error)
    }
}

/// Translate a raw store error into a typed storage kind. This is the only
/// place in the codebase that looks at the provider's wording: callers get
/// a `StorageKind` and never see the message.
fn storage_error(err: rusqlite::Error) -> BloomError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(ffi_err, msg) => match ffi_err.code {
            rusqlite::ErrorCode::ReadOnly | rusqlite::ErrorCode::PermissionDenied => {
                StorageKind::AccessDenied
            }
            _ if msg.as_deref().is_some_and(|m| m.contains("no such table")) => {
                StorageKind::SchemaMissing
            }
            _ => StorageKind::Unavailable,
        },
        _ => StorageKind::Unavailable,
    };
    warn!("storage failure ({:?}): {}", kind, err);
    BloomError::Storage(kind)
}
