//! Input path resolution.
//!
//! Both inputs live under the project's `.taskmaster/` directory by default:
//! - **Task store**: `.taskmaster/tasks/tasks.json`
//! - **Markdown outline**: `.taskmaster/docs/new-implements-26112025.md`
//!
//! Defaults are anchored at the nearest ancestor of the working directory
//! that contains `.taskmaster/`, so the tool behaves the same from any
//! subdirectory of a project. Explicit paths are used exactly as given.
//! Nothing here reads environment variables.

use std::path::{Path, PathBuf};

/// Project directory that holds the task store and outlines.
pub const TASKMASTER_DIR: &str = ".taskmaster";

/// Default task store, relative to the project root.
pub const DEFAULT_TASKS_FILE: &str = ".taskmaster/tasks/tasks.json";

/// Default markdown outline, relative to the project root.
pub const DEFAULT_MARKDOWN_FILE: &str = ".taskmaster/docs/new-implements-26112025.md";

/// The pair of files an import reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// JSON task store (read, then rewritten)
    pub tasks: PathBuf,
    /// Markdown outline (read only)
    pub markdown: PathBuf,
}

impl InputPaths {
    /// Default paths anchored at `root`.
    #[must_use]
    pub fn defaults_in(root: &Path) -> Self {
        Self {
            tasks: root.join(DEFAULT_TASKS_FILE),
            markdown: root.join(DEFAULT_MARKDOWN_FILE),
        }
    }
}

/// Walk up from `start` looking for a directory containing `.taskmaster/`.
#[must_use]
pub fn discover_project_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(TASKMASTER_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Walk up from the current directory looking for a `.taskmaster/` project.
#[must_use]
pub fn discover_project_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    discover_project_root_from(&cwd)
}

/// Resolve the input paths.
///
/// Priority:
/// 1. Explicit `(tasks, markdown)` pair from the command line
/// 2. Defaults under the discovered project root
/// 3. Defaults relative to the working directory
#[must_use]
pub fn resolve_input_paths(explicit: Option<(PathBuf, PathBuf)>) -> InputPaths {
    if let Some((tasks, markdown)) = explicit {
        return InputPaths { tasks, markdown };
    }

    match discover_project_root() {
        Some(root) => {
            tracing::debug!(root = %root.display(), "Using discovered project root");
            InputPaths::defaults_in(&root)
        }
        None => InputPaths::defaults_in(Path::new("")),
    }
}
