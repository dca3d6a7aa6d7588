use serde::{Deserialize, Serialize};

/// Request lifecycle phases. At most one logical operation (upload or ask)
/// is outstanding at a time; callers are expected to check `is_busy` before
/// starting another, and the orchestrator rejects the attempt when they
/// have not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Busy,
    IdleWithError(String),
}

/// Tracks the outstanding-request phase plus whether any document has ever
/// finished processing (the gate for submitting questions).
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    phase: Phase,
    has_processed_document: bool,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Busy)
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::IdleWithError(message) => Some(message),
            _ => None,
        }
    }

    pub fn has_processed_document(&self) -> bool {
        self.has_processed_document
    }

    /// Marks an operation outstanding. Starting a new operation also drops
    /// any banner left over from the previous failure.
    pub fn begin(&mut self) {
        self.phase = Phase::Busy;
    }

    pub fn complete(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::IdleWithError(message.into());
    }

    /// Clears the error banner and nothing else. A no-op outside
    /// `IdleWithError`; in particular it never interrupts a busy operation.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, Phase::IdleWithError(_)) {
            self.phase = Phase::Idle;
        }
    }

    pub fn mark_document_processed(&mut self) {
        self.has_processed_document = true;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_busy: self.is_busy(),
            last_error: self.last_error().map(str::to_string),
            has_processed_document: self.has_processed_document,
        }
    }
}

/// Owned copy of the session state for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub is_busy: bool,
    pub last_error: Option<String>,
    pub has_processed_document: bool,
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
