//! CLI definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::store::DEFAULT_TAG;

pub mod commands;

/// Import a markdown task outline into a JSON task store.
///
/// Every `## Heading` becomes a task and every `- item` below it a subtask.
/// Run without paths to use the project defaults, or pass both paths.
#[derive(Parser, Debug)]
#[command(name = "task-import", author, version, about, long_about = None)]
pub struct Cli {
    /// JSON task store to extend (default: .taskmaster/tasks/tasks.json)
    #[arg(value_name = "TASKS_JSON", requires = "markdown")]
    pub tasks: Option<PathBuf>,

    /// Markdown outline to import (default: .taskmaster/docs/new-implements-26112025.md)
    #[arg(value_name = "MARKDOWN")]
    pub markdown: Option<PathBuf>,

    /// Top-level key whose task list is extended
    #[arg(long, default_value = DEFAULT_TAG)]
    pub tag: String,

    /// Output as JSON (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Parse and number the new tasks without writing the store
    #[arg(long)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The explicit `(tasks, markdown)` pair, if both were given.
    #[must_use]
    pub fn explicit_paths(&self) -> Option<(PathBuf, PathBuf)> {
        match (&self.tasks, &self.markdown) {
            (Some(tasks), Some(markdown)) => Some((tasks.clone(), markdown.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zero_paths_uses_defaults() {
        let cli = Cli::try_parse_from(["task-import"]).unwrap();
        assert_eq!(cli.explicit_paths(), None);
        assert_eq!(cli.tag, "master");
    }

    #[test]
    fn test_two_paths() {
        let cli = Cli::try_parse_from(["task-import", "t.json", "plan.md"]).unwrap();
        assert_eq!(
            cli.explicit_paths(),
            Some((PathBuf::from("t.json"), PathBuf::from("plan.md")))
        );
    }

    #[test]
    fn test_single_path_is_usage_error() {
        let err = Cli::try_parse_from(["task-import", "t.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_three_paths_is_usage_error() {
        let err = Cli::try_parse_from(["task-import", "a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "task-import", "--tag", "feature-x", "--dry-run", "-vv", "a.json", "b.md",
        ])
        .unwrap();
        assert_eq!(cli.tag, "feature-x");
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }
}
