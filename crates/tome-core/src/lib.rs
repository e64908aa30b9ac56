// tome-core/src/lib.rs
//! Core library for the Tome workspace.
//!
//! Everything here is in-memory and synchronous:
//! - typed entities for the three collections (documents, notes, chat)
//! - the [`Workspace`] state container with named mutation operations
//! - the unified content search over all three collections

pub mod highlight;
pub mod model;
pub mod search;
pub mod store;
pub mod token;

pub use highlight::{content_preview, match_ranges, PREVIEW_MAX_CHARS};
pub use model::{
    ChatMessage, Document, FileFormat, MessageAuthor, Note, NotePatch, SourceError, SourceKind,
};
pub use search::{search, ResultKind, SearchFilter, SearchHit};
pub use store::{Workspace, AI_FALLBACK_REPLY};
pub use token::next_id;
