use std::sync::Mutex;
use tldr_notes::ai::Diagnostics;

#[derive(Default)]
pub struct RecordingDiagnostics {
    pub incomplete: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn incomplete(&self) -> Vec<String> {
        self.incomplete.lock().unwrap().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn incomplete_sentence(&self, sentence: &str) {
        self.incomplete.lock().unwrap().push(sentence.to_string());
    }
}
