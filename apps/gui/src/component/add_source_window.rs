use super::ContextComponent;
use crate::constants;
use strum::IntoEnumIterator;
use tome_core::SourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
enum SourceTab {
    #[default]
    File,
    Website,
    #[strum(serialize = "YouTube")]
    YouTube,
    #[strum(serialize = "Paste text")]
    Paste,
}

/// Modal window with one tab per source kind. The add button stays disabled
/// until the current tab's input would pass the kind's constructor, so an
/// invalid URL can never reach the workspace.
#[derive(Default)]
pub struct AddSourceWindow {
    open: bool,
    tab: SourceTab,

    file_name: String,
    url: String,
    paste_title: String,
    paste_text: String,
}

pub struct AddSourceWindowProps {}

pub struct AddSourceWindowOutput {
    pub events: Vec<AddSourceEvent>,
}

pub enum AddSourceEvent {
    Add {
        name: String,
        content: String,
        kind: SourceKind,
        size: String,
    },
}

impl AddSourceWindow {
    pub fn open(&mut self) {
        self.open = true;
        self.tab = SourceTab::default();
        self.file_name.clear();
        self.url.clear();
        self.paste_title.clear();
        self.paste_text.clear();
    }

    fn render_file_tab(&mut self, ui: &mut egui::Ui, events: &mut Vec<AddSourceEvent>) {
        ui.label("File name");
        ui.text_edit_singleline(&mut self.file_name);
        ui.add_space(8.0);

        let name = self.file_name.trim().to_string();
        let enabled = !name.is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Add source")).clicked() {
            events.push(AddSourceEvent::Add {
                content: format!("Content of {name}"),
                kind: SourceKind::file(&name),
                size: "0 KB".to_string(),
                name,
            });
        }
    }

    fn render_url_tab(&mut self, ui: &mut egui::Ui, events: &mut Vec<AddSourceEvent>) {
        let label = match self.tab {
            SourceTab::Website => "Website URL",
            _ => "YouTube URL",
        };
        ui.label(label);
        ui.text_edit_singleline(&mut self.url);

        let url = self.url.trim().to_string();
        let kind = match self.tab {
            SourceTab::Website => SourceKind::website(url.clone()),
            _ => SourceKind::youtube(url.clone()),
        };

        if let Err(e) = &kind {
            if !url.is_empty() {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            }
        }
        ui.add_space(8.0);

        if ui
            .add_enabled(kind.is_ok(), egui::Button::new("Add source"))
            .clicked()
        {
            if let Ok(kind) = kind {
                let content = match self.tab {
                    SourceTab::Website => format!("Imported content from {url}"),
                    _ => format!("Transcript of {url}"),
                };
                events.push(AddSourceEvent::Add {
                    name: url,
                    content,
                    kind,
                    size: "—".to_string(),
                });
            }
        }
    }

    fn render_paste_tab(&mut self, ui: &mut egui::Ui, events: &mut Vec<AddSourceEvent>) {
        ui.label("Title");
        ui.text_edit_singleline(&mut self.paste_title);
        ui.label("Text");
        ui.add(
            egui::TextEdit::multiline(&mut self.paste_text)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let title = self.paste_title.trim().to_string();
        let enabled = !title.is_empty() && !self.paste_text.trim().is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Add source")).clicked() {
            let size = format!("{:.1} KB", self.paste_text.len() as f32 / 1024.0);
            events.push(AddSourceEvent::Add {
                name: title,
                content: self.paste_text.clone(),
                kind: SourceKind::pasted_text(),
                size,
            });
        }
    }
}

impl ContextComponent for AddSourceWindow {
    type Props<'a> = AddSourceWindowProps;
    type Output = AddSourceWindowOutput;

    fn render(&mut self, ctx: &egui::Context, _props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        if !self.open {
            return AddSourceWindowOutput { events };
        }

        let mut keep_open = true;
        egui::Window::new("Add source")
            .id(egui::Id::new(constants::ID_WINDOW_ADD_SOURCE))
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for tab in SourceTab::iter() {
                        ui.selectable_value(&mut self.tab, tab, tab.to_string());
                    }
                });
                ui.separator();

                match self.tab {
                    SourceTab::File => self.render_file_tab(ui, &mut events),
                    SourceTab::Website | SourceTab::YouTube => {
                        self.render_url_tab(ui, &mut events)
                    }
                    SourceTab::Paste => self.render_paste_tab(ui, &mut events),
                }
            });

        // A successful add closes the window.
        self.open = keep_open && events.is_empty();

        AddSourceWindowOutput { events }
    }
}
