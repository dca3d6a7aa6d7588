use serde::{Deserialize, Serialize};

use crate::domain::DocumentId;

/// Body of `POST /ask`. `file_id` carries the currently selected document;
/// it is absent when nothing is selected and the service decides how to
/// handle that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(rename = "fileId", skip_serializing_if = "Option::is_none")]
    pub file_id: Option<DocumentId>,
}

/// Success body of `POST /ask`. The backend may attach extra fields (usage
/// accounting and the like); serde drops anything beyond `answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Success body of `POST /upload`. Nothing in it is load-bearing for the
/// client, but the body must still be well-formed JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
}
