//! Task model for the JSON task store.
//!
//! Field names and order match the records already present in the store,
//! so freshly imported tasks sit next to existing ones without reformatting.
//! These types are write-only: existing records stay raw JSON.

use serde::Serialize;

/// Task priority values. Imported tasks are always `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Task and subtask status values. Imported records always start `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A checklist entry under a task, identified as `"<parent>.<position>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
}

/// A top-level task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique positive identifier across the whole store
    pub id: u64,

    pub title: String,

    pub description: String,

    /// Implementation notes (empty on import)
    pub details: String,

    /// How the task will be verified (empty on import)
    pub test_strategy: String,

    pub priority: Priority,

    /// Ids of tasks this one depends on
    pub dependencies: Vec<u64>,

    pub status: TaskStatus,

    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create a pending, medium-priority task with no subtasks.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            details: String::new(),
            test_strategy: String::new(),
            priority: Priority::default(),
            dependencies: Vec::new(),
            status: TaskStatus::default(),
            subtasks: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// Append a pending subtask, numbering it after the existing ones.
    pub fn push_subtask(&mut self, title: impl Into<String>) {
        let position = self.subtasks.len() + 1;
        self.subtasks.push(Subtask {
            id: format!("{}.{position}", self.id),
            title: title.into(),
            status: TaskStatus::Pending,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(4, "Add login");

        assert_eq!(task.id, 4);
        assert_eq!(task.title, "Add login");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.details.is_empty());
        assert!(task.test_strategy.is_empty());
        assert!(task.dependencies.is_empty());
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_push_subtask_numbers_from_one() {
        let mut task = Task::new(6, "Deploy");
        task.push_subtask("write script");
        task.push_subtask("run it");

        let ids: Vec<_> = task.subtasks.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["6.1", "6.2"]);
        assert_eq!(task.subtasks[1].title, "run it");
    }

    #[test]
    fn test_serialized_key_order() {
        let mut task = Task::new(1, "Setup");
        task.push_subtask("init repo");

        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"Setup","description":"","details":"","testStrategy":"","priority":"medium","dependencies":[],"status":"pending","subtasks":[{"id":"1.1","title":"init repo","status":"pending"}]}"#
        );
    }
}
