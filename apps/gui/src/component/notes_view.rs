use super::StatefulComponent;
use crate::util::format_timestamp;
use tome_core::{Note, NotePatch};

/// Notes list with an inline creation form and per-note editing.
#[derive(Default)]
pub struct NotesView {
    new_title: String,
    new_content: String,
    new_tags: String,

    editing: Option<EditBuffer>,
}

struct EditBuffer {
    id: String,
    title: String,
    content: String,
    tags: String,
}

pub struct NotesViewProps<'a> {
    pub notes: &'a [Note],
}

pub struct NotesViewOutput {
    pub events: Vec<NotesViewEvent>,
}

pub enum NotesViewEvent {
    Create {
        title: String,
        content: String,
        tags: Vec<String>,
    },
    Update {
        id: String,
        patch: NotePatch,
    },
    Remove(String),
}

/// Comma-separated input; blank segments are dropped.
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

impl NotesView {
    fn render_new_note_form(
        &mut self,
        ui: &mut egui::Ui,
        events: &mut Vec<NotesViewEvent>,
    ) {
        ui.collapsing("New note", |ui| {
            ui.label("Title");
            ui.text_edit_singleline(&mut self.new_title);
            ui.label("Content");
            ui.add(
                egui::TextEdit::multiline(&mut self.new_content)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.label("Tags (comma separated)");
            ui.text_edit_singleline(&mut self.new_tags);
            ui.add_space(4.0);

            let enabled = !self.new_title.trim().is_empty();
            if ui.add_enabled(enabled, egui::Button::new("Create")).clicked() {
                events.push(NotesViewEvent::Create {
                    title: self.new_title.trim().to_string(),
                    content: self.new_content.clone(),
                    tags: parse_tags(&self.new_tags),
                });
                self.new_title.clear();
                self.new_content.clear();
                self.new_tags.clear();
            }
        });
    }

    fn render_edit_form(ui: &mut egui::Ui, buffer: &mut EditBuffer) -> Option<NotesViewEvent> {
        let mut event = None;

        ui.text_edit_singleline(&mut buffer.title);
        ui.add(
            egui::TextEdit::multiline(&mut buffer.content)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.text_edit_singleline(&mut buffer.tags);

        ui.horizontal(|ui| {
            let enabled = !buffer.title.trim().is_empty();
            if ui.add_enabled(enabled, egui::Button::new("Save")).clicked() {
                event = Some(NotesViewEvent::Update {
                    id: buffer.id.clone(),
                    patch: NotePatch {
                        title: Some(buffer.title.trim().to_string()),
                        content: Some(buffer.content.clone()),
                        tags: Some(parse_tags(&buffer.tags)),
                    },
                });
            }
        });

        event
    }
}

impl StatefulComponent for NotesView {
    type Props<'a> = NotesViewProps<'a>;
    type Output = NotesViewOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        ui.heading("Notes");
        ui.add_space(4.0);
        self.render_new_note_form(ui, &mut events);
        ui.separator();

        if props.notes.is_empty() {
            ui.weak("No notes yet. Create one above or generate one from the studio.");
            return NotesViewOutput { events };
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for note in props.notes {
                    let editing_this =
                        self.editing.as_ref().is_some_and(|b| b.id == note.id);

                    ui.group(|ui| {
                        if editing_this {
                            let mut close_editor = false;
                            if let Some(buffer) = self.editing.as_mut() {
                                if let Some(event) = Self::render_edit_form(ui, buffer) {
                                    events.push(event);
                                    close_editor = true;
                                } else if ui.small_button("Cancel").clicked() {
                                    close_editor = true;
                                }
                            }
                            if close_editor {
                                self.editing = None;
                            }
                            return;
                        }

                        ui.horizontal(|ui| {
                            ui.strong(&note.title);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Delete").clicked() {
                                        events.push(NotesViewEvent::Remove(
                                            note.id.clone(),
                                        ));
                                    }
                                    if ui.small_button("Edit").clicked() {
                                        self.editing = Some(EditBuffer {
                                            id: note.id.clone(),
                                            title: note.title.clone(),
                                            content: note.content.clone(),
                                            tags: note.tags.join(", "),
                                        });
                                    }
                                },
                            );
                        });

                        let mut meta = format_timestamp(&note.timestamp);
                        if !note.tags.is_empty() {
                            meta = format!("{meta} • {}", note.tags.join(", "));
                        }
                        ui.label(egui::RichText::new(meta).small().weak());
                        ui.label(&note.content);
                    });
                    ui.add_space(4.0);
                }
            });

        NotesViewOutput { events }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tags_are_trimmed_and_blanks_dropped() {
        assert_eq!(parse_tags("a, b , ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags("   "), Vec::<String>::new());
        assert_eq!(parse_tags(""), Vec::<String>::new());
    }
}
