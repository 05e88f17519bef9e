//! In-memory memory store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{MemoryError, MemoryStore};

/// Vec-backed memory store. Clones share the underlying entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemoryStore {
    entries: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl InMemoryMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail with the given message.
    pub fn with_write_failure(self, message: impl Into<String>) -> Self {
        *self.failure.lock().unwrap() = Some(message.into());
        self
    }

    /// Snapshot of all stored entries, in insertion order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemoryStore for InMemoryMemoryStore {
    async fn add_memory(&self, text: &str) -> Result<(), MemoryError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(MemoryError::write_failed(message));
        }
        self.entries.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
