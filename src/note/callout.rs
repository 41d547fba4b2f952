//! Formatting of the TLDR callout block inserted at the top of a note.

use crate::core::models::CursorPosition;

pub const CALLOUT_HEADER: &str = "> [!summary] TL;DR";
const SEPARATOR: &str = "\n\n---\n\n";

/// Builds the block spliced into the note: a summary callout with one quoted line
/// per bullet, followed by a horizontal rule.
#[must_use]
pub fn format_tldr_block(bullets: &[String]) -> String {
    let quoted = bullets
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{CALLOUT_HEADER}\n{quoted}{SEPARATOR}")
}

/// Number of lines existing content moves down by when `block` is inserted at
/// the start of a line.
#[must_use]
pub fn lines_occupied(block: &str) -> usize {
    block.matches('\n').count()
}

/// Where the cursor belongs after `block` is inserted at the top of the note.
#[must_use]
pub fn shifted_cursor(original: CursorPosition, block: &str) -> CursorPosition {
    CursorPosition {
        line: original.line + lines_occupied(block),
        ch: original.ch,
    }
}
