//! The "Generate TLDR" command: summarize the active note and insert the result
//! at the top.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::ai::Summarizer;
use crate::core::config::PluginSettings;
use crate::core::models::CursorPosition;
use crate::note::callout::{format_tldr_block, shifted_cursor};
use crate::note::editor::{Editor, Notifier};

pub const NOTICE_NO_NOTE: &str = "Please open a markdown note first";
pub const NOTICE_NO_API_KEY: &str = "Please set your Gemini API key in settings first";
pub const NOTICE_EMPTY_NOTE: &str = "Note is empty. Please add some content first.";
pub const NOTICE_GENERATING: &str = "Generating TLDR...";
pub const NOTICE_SUCCESS: &str = "✓ TLDR generated successfully";
pub const NOTICE_BUSY: &str = "A TLDR is already being generated";

/// How an invocation ended. Every variant has already been reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeOutcome {
    NoActiveNote,
    MissingApiKey,
    EmptyNote,
    Busy,
    Failed(String),
    Inserted { bullets: usize },
}

impl SummarizeOutcome {
    #[must_use]
    pub const fn is_inserted(&self) -> bool {
        matches!(self, SummarizeOutcome::Inserted { .. })
    }
}

/// Runs the TLDR command against a [`Summarizer`].
///
/// At most one invocation is in flight per command; overlapping calls are
/// rejected with a notice instead of issuing a second request.
pub struct SummarizeCommand<S: Summarizer> {
    summarizer: S,
    in_flight: AtomicBool,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: Summarizer> SummarizeCommand<S> {
    pub fn new(summarizer: S) -> Self {
        Self {
            summarizer,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    /// Summarizes the note in `editor` and inserts the TLDR block at its start.
    ///
    /// `editor` is `None` when no editable note is active. The document is only
    /// touched once the summary is ready, so a failure leaves it unchanged.
    pub async fn run<E, N>(
        &self,
        editor: Option<&mut E>,
        settings: &PluginSettings,
        notifier: &N,
    ) -> SummarizeOutcome
    where
        E: Editor + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(_guard) = self.try_begin() else {
            warn!("TLDR requested while another is in flight");
            notifier.notify(NOTICE_BUSY);
            return SummarizeOutcome::Busy;
        };

        let span = info_span!("generate_tldr", invocation_id = %Uuid::new_v4());
        self.run_inner(editor, settings, notifier)
            .instrument(span)
            .await
    }

    async fn run_inner<E, N>(
        &self,
        editor: Option<&mut E>,
        settings: &PluginSettings,
        notifier: &N,
    ) -> SummarizeOutcome
    where
        E: Editor + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(editor) = editor else {
            notifier.notify(NOTICE_NO_NOTE);
            return SummarizeOutcome::NoActiveNote;
        };

        if !settings.has_api_key() {
            notifier.notify(NOTICE_NO_API_KEY);
            return SummarizeOutcome::MissingApiKey;
        }

        let content = editor.get_content();
        if content.trim().is_empty() {
            notifier.notify(NOTICE_EMPTY_NOTE);
            return SummarizeOutcome::EmptyNote;
        }

        notifier.notify(NOTICE_GENERATING);

        let bullets = match self
            .summarizer
            .summarize(&content, &settings.gemini_api_key, settings.tldr_length)
            .await
        {
            Ok(bullets) => bullets,
            Err(e) => {
                error!(error = %e, "TLDR generation error");
                let message = e.to_string();
                notifier.notify(&format!("Error generating TLDR: {message}"));
                return SummarizeOutcome::Failed(message);
            }
        };

        let block = format_tldr_block(&bullets);
        let cursor = editor.get_cursor();

        editor.set_cursor(CursorPosition::origin());
        editor.insert_text_at(CursorPosition::origin(), &block);
        editor.set_cursor(shifted_cursor(cursor, &block));

        info!(
            bullets = bullets.len(),
            cursor_line = cursor.line,
            "Inserted TLDR block"
        );
        notifier.notify(NOTICE_SUCCESS);
        SummarizeOutcome::Inserted {
            bullets: bullets.len(),
        }
    }
}
