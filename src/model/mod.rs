//! Data models for the task store.
//!
//! - Task
//! - Subtask
//! - Priority / TaskStatus

pub mod task;

pub use task::{Priority, Subtask, Task, TaskStatus};
