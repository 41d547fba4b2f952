/// TLDR Notes - summarizes a markdown note into a bulleted TLDR callout using Gemini.
///
/// The crate is split into:
/// 1. A Gemini client that builds the prompt, sends one `generateContent` request and
///    cleans the reply into `- ` bullets
/// 2. A command that checks the note, calls the client and splices the callout block
///    into the top of the note without moving the user's cursor off their text
///
/// The host editor, notifications and settings persistence are traits, so any
/// editor integration (or the bundled `tldr-note` binary) can drive the command.
///
/// # Example
///
/// ```no_run
/// use tldr_notes::ai::LlmClient;
/// use tldr_notes::core::config::{PluginSettings, SummaryLength};
/// use tldr_notes::features::SummarizeCommand;
/// use tldr_notes::note::{TextBuffer, TracingNotifier};
///
/// #[tokio::main]
/// async fn main() {
///     tldr_notes::setup_logging();
///
///     let settings = PluginSettings {
///         gemini_api_key: "dummy_gemini_key".to_string(),
///         tldr_length: SummaryLength::Medium,
///     };
///     let mut note = TextBuffer::new("# Meeting\n\nWe agreed to ship on Friday.");
///
///     let command = SummarizeCommand::new(LlmClient::new());
///     let outcome = command
///         .run(Some(&mut note), &settings, &TracingNotifier)
///         .await;
///
///     if outcome.is_inserted() {
///         println!("{}", note.as_str());
///     }
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod features;
pub mod note;

pub use errors::TldrError;

/// Configure structured logging with JSON output.
///
/// Installs a tracing-subscriber JSON formatter filtered by `RUST_LOG`
/// (defaulting to `info`). Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// tldr_notes::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
