// tome-core/src/store.rs
//! The application-state container.
//!
//! One [`Workspace`] owns all three collections. Reads go through accessor
//! methods, writes only through the named mutators below; every mutator bumps
//! the revision counter so derived views (search) can memoize against it.
//! All operations are synchronous one-step mutations with no intermediate
//! states.

use crate::model::{ChatMessage, Document, MessageAuthor, Note, NotePatch};
use crate::token;

/// Canned assistant reply used by the chat stub — there is no inference.
pub const AI_FALLBACK_REPLY: &str = "I'm sorry, but I couldn't find enough content in the document to answer your query. Try giving me more specific keywords if you think I should know the answer.";

#[derive(Debug, Default, Clone)]
pub struct Workspace {
    documents: Vec<Document>,
    notes: Vec<Note>,
    chat: Vec<ChatMessage>,
    revision: u64,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting state of a fresh session: one selected placeholder document
    /// and a two-message transcript.
    pub fn seeded() -> Self {
        let mut ws = Self::new();
        ws.add_document(Document::new(
            token::next_id(),
            "Untitled document",
            "",
            crate::model::SourceKind::pasted_text(),
            "0 KB",
            token::now_rfc3339(),
        ));
        ws.push_message(MessageAuthor::User, "hello");
        ws.push_message(MessageAuthor::Ai, AI_FALLBACK_REPLY);
        ws
    }

    // ===== Read access =====

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn all_documents_selected(&self) -> bool {
        self.documents.iter().all(|d| d.selected)
    }

    /// Bumped on every mutation; derived views memoize against it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Document mutations =====

    pub fn add_document(&mut self, document: Document) {
        tracing::debug!(id = %document.id, name = %document.name, "add document");
        self.documents.push(document);
        self.revision += 1;
    }

    pub fn remove_document(&mut self, id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        let removed = self.documents.len() != before;
        if removed {
            tracing::debug!(id, "remove document");
            self.revision += 1;
        }
        removed
    }

    /// Rename a document. The name is trimmed; an empty result leaves the
    /// document untouched (invalid input means no action, not an error).
    pub fn rename_document(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        doc.name = name.to_string();
        self.revision += 1;
        true
    }

    pub fn toggle_selection(&mut self, id: &str) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        doc.selected = !doc.selected;
        self.revision += 1;
        true
    }

    /// Pure toggle of the aggregate selection: when every document is
    /// selected, deselect all; otherwise select all. Empty collection is a
    /// no-op.
    pub fn toggle_select_all(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let target = !self.all_documents_selected();
        for doc in &mut self.documents {
            doc.selected = target;
        }
        self.revision += 1;
    }

    // ===== Note mutations =====

    /// Add a note. A whitespace-only title means the note is silently not
    /// created.
    pub fn add_note(&mut self, note: Note) -> bool {
        if note.title.trim().is_empty() {
            return false;
        }
        tracing::debug!(id = %note.id, title = %note.title, "add note");
        self.notes.push(note);
        self.revision += 1;
        true
    }

    pub fn update_note(&mut self, id: &str, patch: NotePatch) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(tags) = patch.tags {
            note.tags = tags;
        }
        self.revision += 1;
        true
    }

    pub fn remove_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    // ===== Chat mutations (append-only) =====

    pub fn push_message(&mut self, author: MessageAuthor, content: impl Into<String>) {
        let message = ChatMessage::new(
            token::next_id(),
            author,
            content,
            token::now_rfc3339(),
        );
        self.chat.push(message);
        self.revision += 1;
    }

    /// Test/seed hook: append a fully formed message without minting tokens.
    pub fn push_raw_message(&mut self, message: ChatMessage) {
        self.chat.push(message);
        self.revision += 1;
    }
}
