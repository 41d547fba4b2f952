//! Command-line host: runs "Generate TLDR" against a markdown file on disk.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tldr_notes::ai::LlmClient;
use tldr_notes::core::config::{PluginSettings, SummaryLength, load_settings};
use tldr_notes::core::models::CursorPosition;
use tldr_notes::core::settings_store::JsonFileStore;
use tldr_notes::features::{SummarizeCommand, check_api_key};
use tldr_notes::note::{Editor, Notifier, TextBuffer};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "tldr-note", about = "Insert a Gemini-generated TLDR at the top of a note")]
struct Cli {
    /// Markdown note to summarize in place
    #[arg(required_unless_present = "check_key")]
    note: Option<PathBuf>,

    /// Plugin settings file (`{"geminiApiKey": ..., "tldrLength": ...}`)
    #[arg(long, env = "TLDR_SETTINGS")]
    settings: Option<PathBuf>,

    /// Overrides the API key from the settings file
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Overrides the TLDR length from the settings file
    #[arg(long)]
    length: Option<SummaryLength>,

    #[arg(long, env = "GEMINI_MODEL")]
    model: Option<String>,

    #[arg(long, env = "GEMINI_API_BASE")]
    base_url: Option<String>,

    /// Cursor line before insertion, zero-based
    #[arg(long, default_value_t = 0)]
    line: usize,

    /// Cursor column before insertion, zero-based
    #[arg(long, default_value_t = 0)]
    ch: usize,

    /// Only check whether the API key works
    #[arg(long)]
    check_key: bool,
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tldr_notes::setup_logging();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => load_settings(&JsonFileStore::new(path))
            .await
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => PluginSettings::default(),
    };
    if let Some(key) = cli.api_key {
        settings.gemini_api_key = key;
    }
    if let Some(length) = cli.length {
        settings.tldr_length = length;
    }

    let mut client = LlmClient::new();
    if let Some(base_url) = cli.base_url {
        client = client.with_base_url(base_url);
    }
    if let Some(model) = cli.model {
        client = client.with_model(model);
    }

    if cli.check_key {
        let valid = check_api_key(&client, &settings, &StderrNotifier).await;
        return Ok(if valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let path = cli.note.context("a note path is required")?;
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let mut note = TextBuffer::new(content).with_cursor(CursorPosition::new(cli.line, cli.ch));

    let command = SummarizeCommand::new(client);
    let outcome = command
        .run(Some(&mut note), &settings, &StderrNotifier)
        .await;

    if !outcome.is_inserted() {
        return Ok(ExitCode::FAILURE);
    }

    let cursor = note.get_cursor();
    tokio::fs::write(&path, note.into_string())
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        path = %path.display(),
        cursor_line = cursor.line,
        cursor_ch = cursor.ch,
        "Updated note"
    );
    Ok(ExitCode::SUCCESS)
}
