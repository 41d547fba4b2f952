use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tldr_notes::TldrError;
use tldr_notes::core::SettingsStore;

#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    pub data: Arc<Mutex<Option<Value>>>,
    pub saves: Arc<Mutex<usize>>,
}

impl MemorySettingsStore {
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Arc::new(Mutex::new(Some(data))),
            saves: Arc::new(Mutex::new(0)),
        }
    }

    pub fn saved(&self) -> Option<Value> {
        self.data.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load_data(&self) -> Result<Option<Value>, TldrError> {
        Ok(self.data.lock().unwrap().clone())
    }

    async fn save_data(&self, data: &Value) -> Result<(), TldrError> {
        *self.data.lock().unwrap() = Some(data.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
