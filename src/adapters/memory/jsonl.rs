//! JSONL file memory store.
//!
//! Appends one JSON object per ingested text blob to a local file. This is
//! the write path the conversation mirrors its reports into; a vector
//! store can later index the file for similarity retrieval.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::ports::{MemoryError, MemoryStore};

/// One persisted memory record.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// When the text was ingested.
    pub recorded_at: DateTime<Utc>,
    /// The ingested text.
    pub text: String,
}

/// Append-only JSONL file store.
#[derive(Debug, Clone)]
pub struct JsonlMemoryStore {
    path: PathBuf,
}

impl JsonlMemoryStore {
    /// Creates a store appending to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store appends to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl MemoryStore for JsonlMemoryStore {
    async fn add_memory(&self, text: &str) -> Result<(), MemoryError> {
        let record = MemoryRecord {
            recorded_at: Utc::now(),
            text: text.to_string(),
        };
        let mut line = serde_json::to_string(&record)
            .map_err(|err| MemoryError::write_failed(err.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| MemoryError::write_failed(err.to_string()))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|err| MemoryError::write_failed(err.to_string()))?;

        Ok(())
    }
}
