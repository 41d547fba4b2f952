#![allow(dead_code)]

pub mod diagnostics;
pub mod notifier;
pub mod settings_store;
pub mod summarizer;
pub mod transport;
