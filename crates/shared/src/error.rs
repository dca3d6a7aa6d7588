use serde::{Deserialize, Serialize};

/// Failure body the assistant service SHOULD return on a non-2xx response.
/// Only `message` is contractually read; any other fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
