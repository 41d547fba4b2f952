use tracing::info;

use crate::ai::{LlmClient, Transport};
use crate::core::config::PluginSettings;
use crate::note::editor::Notifier;

pub const NOTICE_ENTER_KEY: &str = "Please enter an API key first";
pub const NOTICE_KEY_VALID: &str = "✓ API key is valid";
pub const NOTICE_KEY_INVALID: &str = "✗ API key is invalid or there was an error";

/// Checks the configured key and tells the user whether it works.
pub async fn check_api_key<T, N>(
    client: &LlmClient<T>,
    settings: &PluginSettings,
    notifier: &N,
) -> bool
where
    T: Transport,
    N: Notifier + ?Sized,
{
    if settings.gemini_api_key.is_empty() {
        notifier.notify(NOTICE_ENTER_KEY);
        return false;
    }

    let valid = client.test_api_key(&settings.gemini_api_key).await;
    info!(valid, "Checked Gemini API key");
    notifier.notify(if valid {
        NOTICE_KEY_VALID
    } else {
        NOTICE_KEY_INVALID
    });
    valid
}
