//! File-backed persistence for the task collection.
//!
//! The whole collection lives in one JSON document:
//!
//! ```json
//! { "last_id": 3, "tasks": [ { "id": 1, "title": "...", ... } ] }
//! ```
//!
//! A bare JSON array of task records is accepted on load as well.
//!
//! ## Write discipline
//!
//! [`Store::save`] never truncates the target in place. It writes the new
//! document to a temporary file in the same directory, syncs it to disk and
//! renames it over the target, so a crash leaves either the old file or the
//! new one. There is no cross-process locking: two processes saving at the
//! same time race and the last rename wins.

use super::tasks::TaskCollection;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::Task;
use serde::Deserialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const STORE_FILE_NAME: &str = "tasks.json";

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTasks {
    Versioned {
        #[serde(default)]
        last_id: u32,
        tasks: Vec<Task>,
    },
    Legacy(Vec<Task>),
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the backing file.
    ///
    /// A missing or blank file is an empty collection. Anything that does not
    /// parse, or parses into records that break the task invariants, is
    /// [`TaskError::CorruptStore`]; the file is not modified.
    pub fn load(&self) -> Result<TaskCollection> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file absent, starting empty");
                return Ok(TaskCollection::new());
            }
            Err(e) => return Err(TaskError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(TaskCollection::new());
        }

        let stored: StoredTasks = serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;
        let (last_id, tasks) = match stored {
            StoredTasks::Versioned { last_id, tasks } => (last_id, tasks),
            StoredTasks::Legacy(tasks) => (0, tasks),
        };
        let collection = TaskCollection::from_parts(last_id, tasks).map_err(|reason| self.corrupt(reason))?;

        tracing::debug!(path = %self.path.display(), count = collection.len(), "store loaded");
        Ok(collection)
    }

    /// Atomically replaces the backing file with `collection`.
    pub fn save(&self, collection: &TaskCollection) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| TaskError::io(&dir, e))?;

        let mut json = serde_json::to_string_pretty(collection).map_err(|e| TaskError::io(&self.path, e.into()))?;
        json.push('\n');

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| TaskError::io(&dir, e))?;
        tmp.write_all(json.as_bytes()).map_err(|e| TaskError::io(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| TaskError::io(tmp.path(), e))?;
        tmp.persist(&self.path).map_err(|e| TaskError::io(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), count = collection.len(), "store saved");
        Ok(())
    }

    fn corrupt(&self, reason: String) -> TaskError {
        TaskError::CorruptStore {
            path: self.path.clone(),
            reason,
        }
    }
}
