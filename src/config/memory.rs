//! Memory store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Memory store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Path of the JSONL file generated text is appended to.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl MemoryConfig {
    /// Validate memory store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyMemoryPath);
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("wayfarer-memories.jsonl")
}
