//! Markdown outline parsing.
//!
//! A task outline is a markdown document where every second-level heading
//! (`## Title`) starts a task and every `- item` line below it becomes a
//! subtask. Everything else is ignored:
//!
//! ```text
//! Intro text is dropped.
//!
//! ## Add login
//! - implement form
//! - add validation
//! Some note            <- not a bullet, ignored
//! ```
//!
//! Only the `- ` bullet style is recognized. `*`, `+`, and numbered lists are
//! treated as plain text.

use std::sync::LazyLock;

use regex::Regex;

/// Start-of-line `## ` marker. Deeper headings (`### `) never match because
/// the third character is not a space.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## ").expect("heading pattern is a valid regex")
});

const BULLET: &str = "- ";

/// One heading section of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedBlock {
    /// First line of the section, trimmed
    pub title: String,
    /// Bullet contents in document order, marker stripped
    pub subtasks: Vec<String>,
}

/// Split a markdown outline into one block per `## ` heading, in document order.
///
/// Text before the first heading is discarded. A heading without bullet
/// lines yields a block with no subtasks.
#[must_use]
pub fn parse_markdown(text: &str) -> Vec<ParsedBlock> {
    HEADING.split(text).skip(1).map(parse_block).collect()
}

fn parse_block(block: &str) -> ParsedBlock {
    let mut lines = block.trim().split('\n');
    let title = lines.next().unwrap_or_default().trim().to_string();

    let subtasks = lines
        .filter_map(|line| line.trim().strip_prefix(BULLET))
        .map(|item| item.trim().to_string())
        .collect();

    ParsedBlock { title, subtasks }
}
