pub mod config;
pub mod models;
pub mod settings_store;

pub use config::{PluginSettings, SummaryLength, load_settings, save_settings};
pub use models::{CursorPosition, SummarizationRequest};
pub use settings_store::{JsonFileStore, SettingsStore};
