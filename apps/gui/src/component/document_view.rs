use super::StatefulComponent;
use crate::util::format_date;
use tome_core::Document;

/// Full-content reader for a single source document.
#[derive(Default)]
pub struct DocumentView;

pub struct DocumentViewProps<'a> {
    pub document: &'a Document,
}

pub struct DocumentViewOutput {
    pub events: Vec<DocumentViewEvent>,
}

pub enum DocumentViewEvent {
    Back,
}

impl StatefulComponent for DocumentView {
    type Props<'a> = DocumentViewProps<'a>;
    type Output = DocumentViewOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];
        let document = props.document;

        if ui.button("← Back").clicked() {
            events.push(DocumentViewEvent::Back);
        }
        ui.add_space(4.0);

        ui.heading(&document.name);
        ui.weak(format!(
            "{} • {} • uploaded {}",
            document.kind.label(),
            document.size,
            format_date(&document.upload_date),
        ));
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(&document.content);
            });

        DocumentViewOutput { events }
    }
}
