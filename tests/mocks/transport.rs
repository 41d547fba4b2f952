use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tldr_notes::TldrError;
use tldr_notes::ai::{HttpResponse, Transport};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub api_key: String,
    pub body: Value,
}

/// Replays canned responses in order and records every request.
#[derive(Clone, Default)]
pub struct MockTransport {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TldrError>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            reason: reason_for(status),
            body: body.to_string(),
        }));
        self
    }

    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.respond(status, &body.to_string())
    }

    /// A successful reply whose first candidate holds `text`.
    pub fn respond_text(self, text: &str) -> Self {
        self.respond_json(
            200,
            json!({
                "candidates": [{
                    "content": {"parts": [{"text": text}], "role": "model"},
                    "finishReason": "STOP"
                }]
            }),
        )
    }

    pub fn fail_network(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TldrError::NetworkError(message.to_string())));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was made")
    }
}

fn reason_for(status: u16) -> Option<String> {
    match status {
        200 => Some("OK"),
        400 => Some("Bad Request"),
        403 => Some("Forbidden"),
        429 => Some("Too Many Requests"),
        500 => Some("Internal Server Error"),
        503 => Some("Service Unavailable"),
        _ => None,
    }
    .map(str::to_string)
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &Value,
    ) -> Result<HttpResponse, TldrError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            api_key: api_key.to_string(),
            body: body.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request: no canned response left")
    }
}
