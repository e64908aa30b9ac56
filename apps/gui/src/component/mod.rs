mod add_source_window;
mod chat_view;
mod document_view;
mod notes_view;
mod search_view;
mod source_list;
mod studio_panel;

pub use add_source_window::{AddSourceEvent, AddSourceWindow, AddSourceWindowProps};
pub use chat_view::{ChatView, ChatViewEvent, ChatViewProps};
pub use document_view::{DocumentView, DocumentViewEvent, DocumentViewProps};
pub use notes_view::{NotesView, NotesViewEvent, NotesViewProps};
pub use search_view::{SearchView, SearchViewEvent, SearchViewProps};
pub use source_list::{SourceList, SourceListEvent, SourceListProps};
pub use studio_panel::{NoteTemplate, StudioPanel, StudioPanelEvent, StudioPanelProps};

/// Component rendered into a region owned by its parent. The parent reads
/// state through props and reacts to the returned events; components never
/// mutate the workspace themselves.
pub trait StatefulComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output;
}

/// Component that owns its own window or panel and renders from the context.
pub trait ContextComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output;
}
