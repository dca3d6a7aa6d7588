use std::sync::Arc;

use anyhow::{anyhow, Result};
use reqwest::{multipart, Client, Response};
use shared::{
    domain::{Document, DocumentId, DocumentView},
    error::ErrorBody,
    protocol::{AskRequest, AskResponse, UploadResponse},
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

pub mod registry;
pub mod session;
pub mod transcript;

pub use registry::DocumentRegistry;
pub use session::{Phase, RequestLifecycle, SessionSnapshot};
pub use transcript::{ChatEntry, Transcript};

/// Base URL of the assistant backend when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

const UPLOAD_FALLBACK_ERROR: &str = "Error uploading file";
const ASK_FALLBACK_ERROR: &str = "Error getting answer";

/// Local precondition failures. These reject the action before any state
/// changes and are never stored as the session error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("another request is already in flight")]
    Busy,
    #[error("question is empty")]
    EmptyQuestion,
    #[error("no document has been processed yet")]
    NoProcessedDocument,
    #[error("no file provided for upload")]
    MissingFile,
}

/// Push notifications for front-ends that render incrementally instead of
/// re-reading snapshots after every call.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    DocumentRegistered(DocumentView),
    EntryAppended(ChatEntry),
    SessionChanged(SessionSnapshot),
    Error(String),
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Upload,
    Ask,
}

impl Operation {
    fn fallback_message(self) -> &'static str {
        match self {
            Operation::Upload => UPLOAD_FALLBACK_ERROR,
            Operation::Ask => ASK_FALLBACK_ERROR,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Operation::Upload => "upload",
            Operation::Ask => "ask",
        }
    }
}

/// Collapses a non-success response into the message shown to the user:
/// the server-supplied `message` field when the body carries one, otherwise
/// the operation's generic fallback.
async fn failure_message(response: Response, operation: Operation) -> String {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| operation.fallback_message().to_string());
    warn!(
        operation = operation.name(),
        %status,
        reason = %message,
        "request rejected by server"
    );
    message
}

struct ClientInner {
    registry: DocumentRegistry,
    transcript: Transcript,
    lifecycle: RequestLifecycle,
}

/// Interaction orchestrator for the assistant backend.
///
/// Sole mutator of the document registry, the transcript, and the request
/// lifecycle. All three live behind one mutex; the lock is released while a
/// network call is in flight, with the busy phase already committed so a
/// second operation started meanwhile is rejected up front.
pub struct AssistantClient {
    http: Client,
    server_url: String,
    inner: Mutex<ClientInner>,
    events: broadcast::Sender<ClientEvent>,
}

impl AssistantClient {
    pub fn new(server_url: impl Into<String>) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            http: Client::new(),
            server_url: server_url.into(),
            inner: Mutex::new(ClientInner {
                registry: DocumentRegistry::new(),
                transcript: Transcript::new(),
                lifecycle: RequestLifecycle::new(),
            }),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Sends a file to the processing service and, on success, registers it
    /// as the active document and announces it in the transcript.
    ///
    /// Rejected with [`ActionError`] while another request is in flight or
    /// when no filename is given; remote failures land in the session error
    /// banner and nothing is registered or appended.
    pub async fn upload_document(&self, filename: &str, bytes: Vec<u8>) -> Result<Document> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(ActionError::MissingFile.into());
        }

        {
            let mut inner = self.inner.lock().await;
            if inner.lifecycle.is_busy() {
                return Err(ActionError::Busy.into());
            }
            inner.lifecycle.begin();
            self.emit_session(&inner);
        }

        info!(
            filename,
            size_bytes = bytes.len(),
            "upload: sending file to processing service"
        );
        let outcome = self.post_upload(filename, bytes).await;

        let mut inner = self.inner.lock().await;
        match outcome {
            Ok(()) => {
                let document = inner.registry.register_uploaded(filename);
                inner.lifecycle.mark_document_processed();
                inner.lifecycle.complete();
                let entry = inner.transcript.push_assistant(format!(
                    "{filename} processed successfully. You can now ask questions."
                ));
                info!(document_id = %document.id, filename, "upload: document registered");
                self.emit(ClientEvent::DocumentRegistered(DocumentView {
                    id: document.id,
                    name: document.name.clone(),
                    is_selected: true,
                }));
                self.emit(ClientEvent::EntryAppended(entry));
                self.emit_session(&inner);
                Ok(document)
            }
            Err(message) => {
                inner.lifecycle.fail(message.clone());
                self.emit_session(&inner);
                self.emit(ClientEvent::Error(message.clone()));
                Err(anyhow!(message))
            }
        }
    }

    /// Submits a question about the currently selected document.
    ///
    /// The user's entry is appended before the network call resolves and
    /// stays in the transcript even when the ask fails, leaving an
    /// unanswered turn; only the answer entry depends on the outcome.
    pub async fn ask(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(ActionError::EmptyQuestion.into());
        }

        let file_id = {
            let mut inner = self.inner.lock().await;
            if inner.lifecycle.is_busy() {
                return Err(ActionError::Busy.into());
            }
            if !inner.lifecycle.has_processed_document() {
                return Err(ActionError::NoProcessedDocument.into());
            }
            let entry = inner.transcript.push_user(question);
            inner.lifecycle.begin();
            self.emit(ClientEvent::EntryAppended(entry));
            self.emit_session(&inner);
            inner.registry.selected().map(|document| document.id)
        };

        debug!(?file_id, "ask: submitting question");
        let outcome = self.post_ask(question, file_id).await;

        let mut inner = self.inner.lock().await;
        match outcome {
            Ok(answer) => {
                inner.lifecycle.complete();
                let entry = inner.transcript.push_assistant(answer.clone());
                self.emit(ClientEvent::EntryAppended(entry));
                self.emit_session(&inner);
                Ok(answer)
            }
            Err(message) => {
                inner.lifecycle.fail(message.clone());
                self.emit_session(&inner);
                self.emit(ClientEvent::Error(message.clone()));
                Err(anyhow!(message))
            }
        }
    }

    /// Switches the active document. Allowed while a request is in flight;
    /// the outstanding request keeps the id it was started with.
    pub async fn select_document(&self, id: DocumentId) {
        let mut inner = self.inner.lock().await;
        inner.registry.select(id);
    }

    /// Clears the error banner without touching any other state.
    pub async fn dismiss_error(&self) {
        let mut inner = self.inner.lock().await;
        inner.lifecycle.dismiss_error();
        self.emit_session(&inner);
    }

    pub async fn documents(&self) -> Vec<DocumentView> {
        self.inner.lock().await.registry.views()
    }

    pub async fn transcript(&self) -> Vec<ChatEntry> {
        self.inner.lock().await.transcript.entries().to_vec()
    }

    pub async fn session(&self) -> SessionSnapshot {
        self.inner.lock().await.lifecycle.snapshot()
    }

    async fn post_upload(&self, filename: &str, bytes: Vec<u8>) -> std::result::Result<(), String> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);
        let response = match self
            .http
            .post(format!("{}/upload", self.server_url))
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "upload: transport failure");
                return Err(UPLOAD_FALLBACK_ERROR.to_string());
            }
        };

        if !response.status().is_success() {
            return Err(failure_message(response, Operation::Upload).await);
        }

        match response.json::<UploadResponse>().await {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(error = %err, "upload: malformed success body");
                Err(UPLOAD_FALLBACK_ERROR.to_string())
            }
        }
    }

    async fn post_ask(
        &self,
        question: &str,
        file_id: Option<DocumentId>,
    ) -> std::result::Result<String, String> {
        let payload = AskRequest {
            question: question.to_string(),
            file_id,
        };
        let response = match self
            .http
            .post(format!("{}/ask", self.server_url))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "ask: transport failure");
                return Err(ASK_FALLBACK_ERROR.to_string());
            }
        };

        if !response.status().is_success() {
            return Err(failure_message(response, Operation::Ask).await);
        }

        match response.json::<AskResponse>().await {
            Ok(body) => Ok(body.answer),
            Err(err) => {
                warn!(error = %err, "ask: malformed success body");
                Err(ASK_FALLBACK_ERROR.to_string())
            }
        }
    }

    fn emit(&self, event: ClientEvent) {
        let _ = self.events.send(event);
    }

    fn emit_session(&self, inner: &ClientInner) {
        self.emit(ClientEvent::SessionChanged(inner.lifecycle.snapshot()));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
