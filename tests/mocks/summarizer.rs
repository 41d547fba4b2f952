use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tldr_notes::TldrError;
use tldr_notes::ai::Summarizer;
use tldr_notes::core::config::SummaryLength;

#[derive(Clone)]
pub struct MockSummarizer {
    pub bullets: Vec<String>,
    pub calls: Arc<Mutex<Vec<(String, String, SummaryLength)>>>,
    pub fail_with: Option<String>,
    pub delay: Option<Duration>,
}

impl MockSummarizer {
    pub fn new(bullets: &[&str]) -> Self {
        Self {
            bullets: bullets.iter().map(|b| (*b).to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            delay: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(&[])
        }
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        content: &str,
        api_key: &str,
        length: SummaryLength,
    ) -> Result<Vec<String>, TldrError> {
        self.calls
            .lock()
            .unwrap()
            .push((content.to_string(), api_key.to_string(), length));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref msg) = self.fail_with {
            return Err(TldrError::ApiError(msg.clone()));
        }
        Ok(self.bullets.clone())
    }
}
