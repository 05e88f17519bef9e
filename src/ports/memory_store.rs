//! Memory store port - write-only semantic memory.
//!
//! Every generated report or flight summary is mirrored into an external
//! store for later similarity retrieval. This scope never reads it back,
//! so the port exposes only the write path, and callers treat writes as
//! fire-and-forget.

use async_trait::async_trait;
use thiserror::Error;

/// Port for appending text to the semantic memory store.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Ingests one text blob.
    async fn add_memory(&self, text: &str) -> Result<(), MemoryError>;
}

/// Memory store errors.
///
/// Callers log these; a failed write never blocks the conversation.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The store rejected or failed the write.
    #[error("memory write failed: {0}")]
    WriteFailed(String),
}

impl MemoryError {
    /// Creates a write failure.
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed(message.into())
    }
}
