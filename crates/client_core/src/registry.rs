use shared::domain::{Document, DocumentId, DocumentView};

/// Tracks documents the processing service has accepted and which one is
/// active for question answering.
///
/// The active document is stored as a single `Option<DocumentId>` rather
/// than a flag per document, so "at most one selected, exactly one once
/// non-empty" holds structurally instead of by careful bookkeeping.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
    selected: Option<DocumentId>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly processed upload under a new unique id. The new
    /// document always becomes the active one.
    pub fn register_uploaded(&mut self, name: impl Into<String>) -> Document {
        let document = Document {
            id: DocumentId::new(),
            name: name.into(),
        };
        self.selected = Some(document.id);
        self.documents.push(document.clone());
        document
    }

    /// Makes `id` the active document. Unknown ids are ignored, so a stale
    /// id handed in by a renderer can never clear or corrupt the selection.
    pub fn select(&mut self, id: DocumentId) {
        if self.documents.iter().any(|document| document.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn selected(&self) -> Option<&Document> {
        let id = self.selected?;
        self.documents.iter().find(|document| document.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn views(&self) -> Vec<DocumentView> {
        self.documents
            .iter()
            .map(|document| DocumentView {
                id: document.id,
                name: document.name.clone(),
                is_selected: self.selected == Some(document.id),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
