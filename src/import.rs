//! Markdown-to-store import.
//!
//! The importer turns each parsed heading block into a [`Task`], numbering
//! tasks consecutively after the highest id already in the store. All
//! records are built before anything is appended, and nothing is written
//! to disk here: the caller saves the store once the import succeeded.

use serde::Serialize;

use crate::description::generate_description;
use crate::error::Result;
use crate::ids::{IdCounter, next_available_id};
use crate::markdown::{ParsedBlock, parse_markdown};
use crate::model::Task;
use crate::store::TaskStore;

/// Statistics for a completed import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// New top-level tasks appended
    pub tasks: usize,
    /// Subtasks created across all new tasks
    pub subtasks: usize,
    /// Id of the first new task, if any were created
    pub first_id: Option<u64>,
    /// Id of the last new task, if any were created
    pub last_id: Option<u64>,
}

impl ImportStats {
    /// Check if the import added nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks == 0
    }
}

/// Build one task from a parsed block, consuming exactly one id.
#[must_use]
pub fn build_task(counter: &mut IdCounter, block: &ParsedBlock) -> Task {
    let mut task = Task::new(counter.take(), block.title.as_str())
        .with_description(generate_description(&block.title));
    for item in &block.subtasks {
        task.push_subtask(item.as_str());
    }
    task
}

/// Appends tasks parsed from markdown to a loaded store.
pub struct Importer<'a> {
    store: &'a mut TaskStore,
    counter: IdCounter,
}

impl<'a> Importer<'a> {
    /// Create an importer, scanning every tag of the store once for the next
    /// free id.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing task has a non-integer id.
    pub fn new(store: &'a mut TaskStore) -> Result<Self> {
        let first = next_available_id(store.all_tasks())?;
        tracing::debug!(next_id = first, "Scanned existing task ids");
        Ok(Self {
            store,
            counter: IdCounter::starting_at(first),
        })
    }

    /// Parse `markdown` and append one task per `## ` heading.
    ///
    /// # Errors
    ///
    /// Returns an error if a task cannot be serialized or the store lost its
    /// task array.
    pub fn import_markdown(&mut self, markdown: &str) -> Result<ImportStats> {
        let blocks = parse_markdown(markdown);
        tracing::debug!(blocks = blocks.len(), "Parsed markdown outline");

        let mut stats = ImportStats::default();
        let mut records = Vec::with_capacity(blocks.len());

        for block in &blocks {
            let task = build_task(&mut self.counter, block);
            tracing::trace!(id = task.id, title = %task.title, subtasks = task.subtasks.len(), "Built task");

            stats.first_id.get_or_insert(task.id);
            stats.last_id = Some(task.id);
            stats.tasks += 1;
            stats.subtasks += task.subtasks.len();
            records.push(serde_json::to_value(&task)?);
        }

        self.store.tasks_mut()?.extend(records);
        tracing::info!(tasks = stats.tasks, subtasks = stats.subtasks, "Imported tasks");

        Ok(stats)
    }
}
