//! JSON task store.
//!
//! The store is a single JSON document grouping tasks under a tag:
//!
//! ```json
//! { "master": { "tasks": [ { "id": 1, "title": "...", ... } ] } }
//! ```
//!
//! The document is held as a raw `serde_json::Value`, so keys this crate does
//! not model (tag metadata, custom task fields) survive a load/save cycle
//! with their order intact.

mod file;

pub use file::atomic_write;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, InputRole, Result};

/// Tag used when none is given.
pub const DEFAULT_TAG: &str = "master";

/// Key holding the task array inside a tag.
const TASKS_KEY: &str = "tasks";

/// A loaded task store bound to the path it came from.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    tag: String,
    document: Value,
}

impl TaskStore {
    /// Load and validate the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not valid
    /// JSON, or lacks the `{ "<tag>": { "tasks": [] } }` structure.
    pub fn open(path: &Path, tag: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::MissingFile {
                role: InputRole::TaskStore,
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        let store = Self::parse(path, tag, &content)?;
        tracing::debug!(
            path = %path.display(),
            tag,
            tasks = store.tasks()?.len(),
            "Loaded task store"
        );
        Ok(store)
    }

    /// Build a store from JSON text that will be saved to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or lacks the expected
    /// structure.
    pub fn parse(path: &Path, tag: &str, content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        let store = Self {
            path: path.to_path_buf(),
            tag: tag.to_string(),
            document,
        };
        store.tasks()?;
        Ok(store)
    }

    /// Path the store is saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tag whose tasks are read and extended.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The tag's task array.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the document no longer has the expected
    /// structure.
    pub fn tasks(&self) -> Result<&Vec<Value>> {
        self.document
            .get(&self.tag)
            .and_then(|group| group.get(TASKS_KEY))
            .and_then(Value::as_array)
            .ok_or_else(|| Error::schema_for_tag(&self.tag))
    }

    /// Task records of every tag in the document, the selected one included.
    ///
    /// Top-level entries without a `tasks` array are skipped.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Value> {
        self.document
            .as_object()
            .into_iter()
            .flat_map(|tags| tags.values())
            .filter_map(|group| group.get(TASKS_KEY).and_then(Value::as_array))
            .flatten()
    }

    /// Mutable access to the tag's task array.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the document no longer has the expected
    /// structure.
    pub fn tasks_mut(&mut self) -> Result<&mut Vec<Value>> {
        let tag = &self.tag;
        self.document
            .get_mut(tag)
            .and_then(|group| group.get_mut(TASKS_KEY))
            .and_then(Value::as_array_mut)
            .ok_or_else(|| Error::schema_for_tag(tag))
    }

    /// Render the whole document: two-space indent, non-ASCII kept literal.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Rewrite the store file in full.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the atomic write fails.
    pub fn save(&self) -> Result<()> {
        let content = self.to_pretty_json()?;
        atomic_write(&self.path, &content)?;
        tracing::info!(path = %self.path.display(), bytes = content.len(), "Saved task store");
        Ok(())
    }
}
