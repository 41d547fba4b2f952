//! Capabilities the host editor provides.

use tracing::info;

use crate::core::models::CursorPosition;

/// The active, editable note.
pub trait Editor {
    fn get_content(&self) -> String;

    fn get_cursor(&self) -> CursorPosition;

    fn set_cursor(&mut self, position: CursorPosition);

    /// Inserts `text` at `position`, shifting everything after it.
    fn insert_text_at(&mut self, position: CursorPosition, text: &str);
}

/// User-facing notification sink.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Writes notices to the log instead of a UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(notice = message, "Notice");
    }
}
