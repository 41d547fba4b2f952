use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::settings_store::SettingsStore;
use crate::errors::TldrError;

/// How verbose the generated TLDR should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryLength {
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// Maps a persisted value onto a valid mode. Anything that is not exactly
    /// `"Medium"` or `"Long"` (including the retired `"Short"`) becomes `Medium`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SummaryLength::Medium => "Medium",
            SummaryLength::Long => "Long",
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Medium" => Ok(SummaryLength::Medium),
            "Long" => Ok(SummaryLength::Long),
            other => Err(format!(
                "Unknown TLDR length '{other}', expected Medium or Long"
            )),
        }
    }
}

/// The persisted plugin configuration.
///
/// Passed explicitly into every operation; nothing in the crate reads it from
/// global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSettings {
    pub gemini_api_key: String,
    pub tldr_length: SummaryLength,
}

/// Loose view of whatever the host persisted. Older versions wrote values we no
/// longer accept, so the length is kept untyped until it has been normalized.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    #[serde(default)]
    gemini_api_key: Option<String>,
    #[serde(default)]
    tldr_length: Option<Value>,
}

impl PluginSettings {
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }

    /// Merges raw persisted data over the defaults.
    ///
    /// Returns the settings and whether the length had to be normalized, in which
    /// case the caller should write the record back.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if `raw` is not a JSON object of the expected shape.
    pub fn from_stored(raw: Option<Value>) -> Result<(Self, bool), TldrError> {
        let stored: StoredSettings = match raw {
            None | Some(Value::Null) => StoredSettings::default(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| TldrError::SettingsError(format!("Malformed settings: {e}")))?,
        };

        let (tldr_length, migrated) = match stored.tldr_length {
            None => (SummaryLength::default(), false),
            Some(Value::String(s)) => {
                let length = SummaryLength::normalize(&s);
                (length, length.as_str() != s)
            }
            Some(_) => (SummaryLength::default(), true),
        };

        Ok((
            Self {
                gemini_api_key: stored.gemini_api_key.unwrap_or_default(),
                tldr_length,
            },
            migrated,
        ))
    }
}

/// Loads settings from `store`, migrating legacy length values to `Medium`.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or holds malformed data.
pub async fn load_settings<S>(store: &S) -> Result<PluginSettings, TldrError>
where
    S: SettingsStore + ?Sized,
{
    let raw = store.load_data().await?;
    let (settings, migrated) = PluginSettings::from_stored(raw)?;

    if migrated {
        warn!(
            tldr_length = %settings.tldr_length,
            "Unsupported TLDR length in stored settings, migrated to default"
        );
        save_settings(store, &settings).await?;
    }

    info!(
        tldr_length = %settings.tldr_length,
        has_api_key = settings.has_api_key(),
        "Loaded plugin settings"
    );
    Ok(settings)
}

/// # Errors
///
/// Returns an error if the settings cannot be serialized or the store rejects the write.
pub async fn save_settings<S>(store: &S, settings: &PluginSettings) -> Result<(), TldrError>
where
    S: SettingsStore + ?Sized,
{
    let value = serde_json::to_value(settings)
        .map_err(|e| TldrError::SettingsError(format!("Failed to serialize settings: {e}")))?;
    store.save_data(&value).await
}
