//! Import command implementation.
//!
//! Loads the task store and the markdown outline, appends one task per
//! heading, and rewrites the store. The store is only written after every
//! new record has been built, so a failure leaves the file untouched.

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::cli::Cli;
use crate::config::{InputPaths, resolve_input_paths};
use crate::error::{Error, InputRole, Result};
use crate::import::{ImportStats, Importer};
use crate::store::TaskStore;

/// Execute the import.
///
/// # Errors
///
/// Returns an error if either input is missing, the store is malformed, or
/// the store cannot be written.
pub fn execute(cli: &Cli, json: bool) -> Result<()> {
    let paths = resolve_input_paths(cli.explicit_paths());
    let human = !json && !cli.quiet;

    if human {
        print_paths(&paths);
    }

    require_file(&paths.tasks, InputRole::TaskStore)?;
    require_file(&paths.markdown, InputRole::Markdown)?;

    let mut store = TaskStore::open(&paths.tasks, &cli.tag)?;
    let markdown = fs::read_to_string(&paths.markdown)?;

    let existing = store.tasks()?.len();
    let stats = Importer::new(&mut store)?.import_markdown(&markdown)?;

    if cli.dry_run {
        tracing::info!("Dry run, task store not written");
    } else {
        store.save()?;
    }

    if json {
        let output = serde_json::json!({
            "success": true,
            "tasks_file": paths.tasks.display().to_string(),
            "markdown_file": paths.markdown.display().to_string(),
            "tag": store.tag(),
            "dry_run": cli.dry_run,
            "stats": stats,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else if human {
        if cli.dry_run {
            let preview = store
                .tasks()?
                .get(existing..)
                .ok_or_else(|| Error::Other("Imported tasks missing from store".to_string()))?;
            println!("{}", serde_json::to_string_pretty(preview)?);
        }
        print_summary(&stats, store.path(), cli.dry_run);
    }

    Ok(())
}

fn require_file(path: &Path, role: InputRole) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingFile {
            role,
            path: path.to_path_buf(),
        })
    }
}

fn print_paths(paths: &InputPaths) {
    println!("{}", "Using files:".blue().bold());
    println!("  JSON: {}", paths.tasks.display());
    println!("  MD  : {}", paths.markdown.display());
}

fn print_summary(stats: &ImportStats, tasks_path: &Path, dry_run: bool) {
    if dry_run {
        println!("{}", "Dry run complete, nothing written.".yellow().bold());
    } else {
        println!("{}", "Import complete!".green().bold());
    }

    if stats.is_empty() {
        println!("  {}", "No `## ` headings found, no tasks added".yellow());
    } else {
        println!("  {} new tasks added", stats.tasks);
    }
    if let (Some(first), Some(last)) = (stats.first_id, stats.last_id) {
        println!("  Ids: {first}..={last} ({} subtasks)", stats.subtasks);
    }
    if dry_run {
        println!("  {}", format!("Would update: {}", tasks_path.display()).dimmed());
    } else {
        println!("  File updated: {}", tasks_path.display());
    }
}
