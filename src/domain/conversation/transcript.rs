//! Append-only conversation transcript.

use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The human user.
    User,
    /// The assistant.
    Assistant,
}

/// One rendered message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who spoke.
    pub speaker: Speaker,
    /// What was said.
    pub text: String,
}

/// Ordered, append-only sequence of conversation messages.
///
/// Entries are never mutated or truncated; every processed user turn adds
/// exactly one user entry and one assistant entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user message.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::User,
            text: text.into(),
        });
    }

    /// Appends an assistant message.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::Assistant,
            text: text.into(),
        });
    }

    /// Number of entries so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been said yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}
