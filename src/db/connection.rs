use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use rusqlite::{Connection, OpenFlags};

use crate::error::{DashboardError, Result};

/// Handle on the on-disk eye-health store.
///
/// Holds only the path. Every `execute` opens its own read-only connection
/// and drops it before returning, so no connection outlives a single call.
#[derive(Debug, Clone)]
pub struct Database {
    db_path: Arc<PathBuf>,
}

impl Database {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    pub fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = Connection::open_with_flags(
            self.path(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|err| {
            DashboardError::unavailable(
                format!("failed to open {}", self.path().display()),
                err,
            )
        })?;

        debug!("Opened {} read-only", self.path().display());
        let result = task(&conn);

        // A failed close is logged, never surfaced.
        if let Err((_, err)) = conn.close() {
            debug!("Closing {} failed: {err}", self.path().display());
        }

        result
    }
}
