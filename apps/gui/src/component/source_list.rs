use super::StatefulComponent;
use tome_core::Document;

/// Sidebar listing every source document with selection toggles, inline
/// rename, and removal.
#[derive(Default)]
pub struct SourceList {
    editing_id: Option<String>,
    edit_buffer: String,
}

pub struct SourceListProps<'a> {
    pub documents: &'a [Document],
    pub all_selected: bool,
}

pub struct SourceListOutput {
    pub events: Vec<SourceListEvent>,
}

pub enum SourceListEvent {
    AddRequested,
    ToggleSelectAll,
    ToggleSelection(String),
    Open(String),
    Rename { id: String, name: String },
    Remove(String),
}

impl StatefulComponent for SourceList {
    type Props<'a> = SourceListProps<'a>;
    type Output = SourceListOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        ui.horizontal(|ui| {
            ui.heading("Sources");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ Add").clicked() {
                    events.push(SourceListEvent::AddRequested);
                }
            });
        });
        ui.separator();

        if props.documents.is_empty() {
            ui.weak("No sources yet. Add one to get started.");
            return SourceListOutput { events };
        }

        let mut all_selected = props.all_selected;
        if ui.checkbox(&mut all_selected, "Select all sources").changed() {
            events.push(SourceListEvent::ToggleSelectAll);
        }
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for doc in props.documents {
                    ui.horizontal(|ui| {
                        let mut selected = doc.selected;
                        if ui.checkbox(&mut selected, "").changed() {
                            events.push(SourceListEvent::ToggleSelection(doc.id.clone()));
                        }

                        if self.editing_id.as_deref() == Some(doc.id.as_str()) {
                            let resp = ui.text_edit_singleline(&mut self.edit_buffer);
                            if resp.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                events.push(SourceListEvent::Rename {
                                    id: doc.id.clone(),
                                    name: self.edit_buffer.trim().to_string(),
                                });
                                self.editing_id = None;
                            } else if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                                self.editing_id = None;
                            }
                        } else {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .small_button("🗑")
                                        .on_hover_text("Remove source")
                                        .clicked()
                                    {
                                        events.push(SourceListEvent::Remove(
                                            doc.id.clone(),
                                        ));
                                    }
                                    if ui
                                        .small_button("✏")
                                        .on_hover_text("Rename source")
                                        .clicked()
                                    {
                                        self.editing_id = Some(doc.id.clone());
                                        self.edit_buffer = doc.name.clone();
                                    }

                                    ui.with_layout(
                                        egui::Layout::left_to_right(egui::Align::Center),
                                        |ui| {
                                            let label = ui
                                                .add(
                                                    egui::Label::new(&doc.name)
                                                        .truncate()
                                                        .sense(egui::Sense::click()),
                                                )
                                                .on_hover_text(doc.kind.label());
                                            if label.clicked() {
                                                events.push(SourceListEvent::Open(
                                                    doc.id.clone(),
                                                ));
                                            }
                                        },
                                    );
                                },
                            );
                        }
                    });
                }
            });

        SourceListOutput { events }
    }
}
