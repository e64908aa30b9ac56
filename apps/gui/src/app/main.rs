use super::MainView;
use crate::component::{
    self, AddSourceEvent, ChatViewEvent, DocumentViewEvent, NotesViewEvent,
    SearchViewEvent, SourceListEvent, StudioPanelEvent,
};
use crate::component::{ContextComponent, StatefulComponent};
use crate::config::Config;
use crate::constants;
use crate::ui;
use tome_core::token::{next_id, now_rfc3339};
use tome_core::{AI_FALLBACK_REPLY, Document, MessageAuthor, Note, Workspace};
use tracing::info;

pub struct App {
    s: State,
    workspace: Workspace,

    source_list: component::SourceList,
    add_source_window: component::AddSourceWindow,
    chat_view: component::ChatView,
    notes_view: component::NotesView,
    search_view: component::SearchView,
    studio_panel: component::StudioPanel,
    document_view: component::DocumentView,
}

#[derive(Default)]
pub struct State {
    active_view: MainView,

    /// When set, the central panel shows this document instead of the
    /// active view.
    viewing_document: Option<String>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        ui::setup_ui(&cc.egui_ctx, &config.ui);
        info!(config = %config.config_path.display(), "starting up");

        Self {
            s: State::default(),
            workspace: Workspace::seeded(),
            source_list: Default::default(),
            add_source_window: Default::default(),
            chat_view: Default::default(),
            notes_view: Default::default(),
            search_view: Default::default(),
            studio_panel: Default::default(),
            document_view: Default::default(),
        }
    }

    fn render_source_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left(constants::ID_PANEL_SOURCES)
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                let props = component::SourceListProps {
                    documents: self.workspace.documents(),
                    all_selected: self.workspace.all_documents_selected(),
                };
                let output = self.source_list.render(ui, props);

                for event in output.events {
                    self.apply_source_event(event);
                }
            });
    }

    fn apply_source_event(&mut self, event: SourceListEvent) {
        match event {
            SourceListEvent::AddRequested => self.add_source_window.open(),
            SourceListEvent::ToggleSelectAll => self.workspace.toggle_select_all(),
            SourceListEvent::ToggleSelection(id) => {
                self.workspace.toggle_selection(&id);
            }
            SourceListEvent::Open(id) => {
                if self.workspace.document(&id).is_some() {
                    self.s.viewing_document = Some(id);
                }
            }
            SourceListEvent::Rename { id, name } => {
                self.workspace.rename_document(&id, &name);
            }
            SourceListEvent::Remove(id) => {
                self.workspace.remove_document(&id);
                if self.s.viewing_document.as_deref() == Some(id.as_str()) {
                    self.s.viewing_document = None;
                }
            }
        }
    }

    fn render_studio_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right(constants::ID_PANEL_STUDIO)
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                let props = component::StudioPanelProps {
                    notes: self.workspace.notes(),
                };
                let output = self.studio_panel.render(ui, props);

                for event in output.events {
                    match event {
                        StudioPanelEvent::GenerateNote(template) => {
                            let note = Note::new(
                                next_id(),
                                template.title(),
                                template.content(),
                                vec![template.tag().to_string()],
                                now_rfc3339(),
                            );
                            self.workspace.add_note(note);
                            self.s.active_view = MainView::Notes;
                            self.s.viewing_document = None;
                        }
                        StudioPanelEvent::OpenNotes => {
                            self.s.active_view = MainView::Notes;
                            self.s.viewing_document = None;
                        }
                    }
                }
            });
    }

    fn render_view_tabs(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top(constants::ID_PANEL_VIEW_TABS).show(ctx, |ui| {
            ui.horizontal(|ui| {
                for view in MainView::TABS {
                    let selected = self.s.viewing_document.is_none()
                        && self.s.active_view == view;
                    if ui.selectable_label(selected, view.to_string()).clicked() {
                        self.s.active_view = view;
                        self.s.viewing_document = None;
                    }
                }
            });
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(id) = self.s.viewing_document.clone() {
                // Stale after removal from the sidebar.
                if self.workspace.document(&id).is_none() {
                    self.s.viewing_document = None;
                } else {
                    self.render_document_view(ui, &id);
                    return;
                }
            }

            match self.s.active_view {
                MainView::Chat => self.render_chat_view(ui),
                MainView::Search => self.render_search_view(ui),
                MainView::Notes => self.render_notes_view(ui),
            }
        });
    }

    fn render_document_view(&mut self, ui: &mut egui::Ui, id: &str) {
        let Some(document) = self.workspace.document(id) else {
            return;
        };
        let output = self
            .document_view
            .render(ui, component::DocumentViewProps { document });

        for event in output.events {
            match event {
                DocumentViewEvent::Back => self.s.viewing_document = None,
            }
        }
    }

    fn render_chat_view(&mut self, ui: &mut egui::Ui) {
        let props = component::ChatViewProps {
            messages: self.workspace.chat_messages(),
        };
        let output = self.chat_view.render(ui, props);

        for event in output.events {
            match event {
                ChatViewEvent::Send(text) => {
                    self.workspace.push_message(MessageAuthor::User, text);
                    self.workspace.push_message(MessageAuthor::Ai, AI_FALLBACK_REPLY);
                }
            }
        }
    }

    fn render_search_view(&mut self, ui: &mut egui::Ui) {
        let props = component::SearchViewProps {
            workspace: &self.workspace,
        };
        let output = self.search_view.render(ui, props);

        for event in output.events {
            match event {
                SearchViewEvent::OpenDocument(id) => {
                    self.s.viewing_document = Some(id);
                }
            }
        }
    }

    fn render_notes_view(&mut self, ui: &mut egui::Ui) {
        let props = component::NotesViewProps {
            notes: self.workspace.notes(),
        };
        let output = self.notes_view.render(ui, props);

        for event in output.events {
            match event {
                NotesViewEvent::Create {
                    title,
                    content,
                    tags,
                } => {
                    let note = Note::new(next_id(), title, content, tags, now_rfc3339());
                    self.workspace.add_note(note);
                }
                NotesViewEvent::Update { id, patch } => {
                    self.workspace.update_note(&id, patch);
                }
                NotesViewEvent::Remove(id) => {
                    self.workspace.remove_note(&id);
                }
            }
        }
    }

    fn render_add_source_window(&mut self, ctx: &egui::Context) {
        let output = self
            .add_source_window
            .render(ctx, component::AddSourceWindowProps {});

        for event in output.events {
            match event {
                AddSourceEvent::Add {
                    name,
                    content,
                    kind,
                    size,
                } => {
                    let document =
                        Document::new(next_id(), name, content, kind, size, now_rfc3339());
                    info!(id = %document.id, "source added");
                    self.workspace.add_document(document);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_source_panel(ctx);
        self.render_studio_panel(ctx);
        self.render_view_tabs(ctx);
        self.render_central_panel(ctx);
        self.render_add_source_window(ctx);
    }
}
