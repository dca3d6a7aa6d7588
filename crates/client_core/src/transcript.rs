use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One turn in the conversation, authored either by the human or by the
/// assistant/system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub text: String,
    pub is_user: bool,
    pub sent_at: DateTime<Utc>,
}

/// Append-only transcript shared across all documents.
///
/// Entries are recorded in the order operations are invoked and are never
/// reordered or rewritten; a question whose answer never arrives simply
/// stays in the log as an unanswered turn.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> ChatEntry {
        self.push(text.into(), true)
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> ChatEntry {
        self.push(text.into(), false)
    }

    fn push(&mut self, text: String, is_user: bool) -> ChatEntry {
        let entry = ChatEntry {
            text,
            is_user,
            sent_at: Utc::now(),
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/transcript_tests.rs"]
mod tests;
