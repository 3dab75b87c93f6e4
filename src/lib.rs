//! task-import - markdown outlines into a JSON task store
//!
//! This crate provides the core functionality for the `task-import` CLI tool.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Default input path resolution
//! - [`markdown`] - Heading/bullet outline parsing
//! - [`ids`] - Next-id scan over existing tasks
//! - [`description`] - Boilerplate task descriptions
//! - [`import`] - Task construction and merge into the store
//! - [`model`] - Task and subtask types
//! - [`store`] - JSON task store load/save
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use task_import::import::Importer;
//! use task_import::store::{TaskStore, DEFAULT_TAG};
//!
//! let mut store = TaskStore::open(Path::new(".taskmaster/tasks/tasks.json"), DEFAULT_TAG)?;
//! let stats = Importer::new(&mut store)?.import_markdown("## Setup\n- init repo\n")?;
//! store.save()?;
//! println!("added {} tasks", stats.tasks);
//! # Ok::<(), task_import::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod description;
pub mod error;
pub mod ids;
pub mod import;
pub mod markdown;
pub mod model;
pub mod store;

pub use error::{Error, Result};
