//! Note editing: host editor capabilities, an in-memory buffer, and the callout format.

pub mod buffer;
pub mod callout;
pub mod editor;

pub use buffer::TextBuffer;
pub use callout::{format_tldr_block, shifted_cursor};
pub use editor::{Editor, Notifier, TracingNotifier};
