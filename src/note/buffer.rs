use super::editor::Editor;
use crate::core::models::CursorPosition;

/// In-memory note implementing [`Editor`].
///
/// Positions are clamped to the document the way an editor clamps a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    cursor: CursorPosition,
}

impl TextBuffer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            cursor: CursorPosition::origin(),
        }
    }

    #[must_use]
    pub fn with_cursor(mut self, position: CursorPosition) -> Self {
        self.set_cursor(position);
        self
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.content
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    fn line(&self, index: usize) -> &str {
        self.content.split('\n').nth(index).unwrap_or("")
    }

    fn clamp(&self, position: CursorPosition) -> CursorPosition {
        let line = position.line.min(self.line_count() - 1);
        let ch = position.ch.min(self.line(line).chars().count());
        CursorPosition { line, ch }
    }

    /// Byte offset of a (clamped) position.
    fn offset_of(&self, position: CursorPosition) -> usize {
        let position = self.clamp(position);
        let line_start: usize = self
            .content
            .split('\n')
            .take(position.line)
            .map(|l| l.len() + 1)
            .sum();
        let within = self
            .line(position.line)
            .char_indices()
            .nth(position.ch)
            .map_or_else(|| self.line(position.line).len(), |(i, _)| i);
        line_start + within
    }
}

impl Editor for TextBuffer {
    fn get_content(&self) -> String {
        self.content.clone()
    }

    fn get_cursor(&self) -> CursorPosition {
        self.cursor
    }

    fn set_cursor(&mut self, position: CursorPosition) {
        self.cursor = self.clamp(position);
    }

    fn insert_text_at(&mut self, position: CursorPosition, text: &str) {
        let offset = self.offset_of(position);
        self.content.insert_str(offset, text);
    }
}
