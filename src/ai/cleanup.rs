//! Turns raw model output into a clean list of `- ` bullets.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static LEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•*\-]\s*").expect("static regex compile"));
static BULLET_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s*").expect("static regex compile"));

/// Receives non-fatal observations about model output.
pub trait Diagnostics: Send + Sync {
    /// A bullet whose sentence does not end in `.`, `!` or `?`. Usually means the
    /// model stopped mid-sentence.
    fn incomplete_sentence(&self, sentence: &str);
}

/// Reports diagnostics as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn incomplete_sentence(&self, sentence: &str) {
        warn!(sentence, "TLDR: sentence may be incomplete");
    }
}

/// Normalizes a single non-blank, trimmed line to `- <text>`.
///
/// One leading `•`, `*` or `-` marker and the whitespace after it are replaced
/// by `- `. Returns `None` when nothing but the marker is left.
#[must_use]
pub fn normalize_bullet(line: &str) -> Option<String> {
    let stripped = LEADING_MARKER.replace(line, "");
    let text = stripped.trim();
    if text.is_empty() {
        return None;
    }
    Some(format!("- {text}"))
}

/// Whether the sentence inside `bullet` ends in terminal punctuation.
#[must_use]
pub fn is_complete_sentence(bullet: &str) -> bool {
    BULLET_PREFIX
        .replace(bullet, "")
        .trim()
        .ends_with(['.', '!', '?'])
}

/// Splits `text` into bullets: trims each line, drops blank and marker-only
/// lines, normalizes markers. Order is preserved and nothing is merged or
/// truncated. Possibly truncated sentences are passed through and reported to
/// `diagnostics`.
pub fn clean_bullets(text: &str, diagnostics: &dyn Diagnostics) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(normalize_bullet)
        .inspect(|bullet| {
            if !is_complete_sentence(bullet) {
                let sentence = BULLET_PREFIX.replace(bullet, "");
                diagnostics.incomplete_sentence(sentence.trim());
            }
        })
        .collect()
}
