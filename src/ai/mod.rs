//! All AI/LLM functionality

pub mod cleanup;
pub mod client;
pub mod prompt_builder;
pub mod transport;
pub mod wire;

// Re-export main types for convenience
pub use cleanup::{Diagnostics, TracingDiagnostics, clean_bullets};
pub use client::{LlmClient, Summarizer};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
