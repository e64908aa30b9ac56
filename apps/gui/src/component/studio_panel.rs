use super::StatefulComponent;
use strum::IntoEnumIterator;
use tome_core::Note;
use tracing::info;

/// The four canned note templates the studio can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum NoteTemplate {
    #[strum(serialize = "Study guide")]
    StudyGuide,
    #[strum(serialize = "Briefing doc")]
    BriefingDoc,
    #[strum(serialize = "FAQ")]
    Faq,
    Timeline,
}

impl NoteTemplate {
    pub fn title(&self) -> &'static str {
        match self {
            NoteTemplate::StudyGuide => "Study guide",
            NoteTemplate::BriefingDoc => "Briefing doc",
            NoteTemplate::Faq => "FAQ",
            NoteTemplate::Timeline => "Timeline",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            NoteTemplate::StudyGuide => "study-guide",
            NoteTemplate::BriefingDoc => "briefing-doc",
            NoteTemplate::Faq => "faq",
            NoteTemplate::Timeline => "timeline",
        }
    }

    pub fn content(&self) -> String {
        format!(
            "{} generation is not available offline. \
             Connect a model backend to fill this note in.",
            self.title()
        )
    }
}

/// Right-hand studio panel: audio overview stub, note generation buttons,
/// and a short list of recent notes.
#[derive(Default)]
pub struct StudioPanel {
    audio_status: Option<String>,
}

pub struct StudioPanelProps<'a> {
    pub notes: &'a [Note],
}

pub struct StudioPanelOutput {
    pub events: Vec<StudioPanelEvent>,
}

pub enum StudioPanelEvent {
    GenerateNote(NoteTemplate),
    OpenNotes,
}

impl StatefulComponent for StudioPanel {
    type Props<'a> = StudioPanelProps<'a>;
    type Output = StudioPanelOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        ui.heading("Studio");
        ui.separator();

        ui.strong("Audio Overview");
        if ui.button("Generate").clicked() {
            info!("audio overview requested");
            self.audio_status =
                Some("Audio overviews are not available in this build.".to_string());
        }
        if let Some(status) = &self.audio_status {
            ui.weak(status);
        }
        ui.separator();

        ui.strong("Generate a note");
        ui.horizontal_wrapped(|ui| {
            for template in NoteTemplate::iter() {
                if ui.button(template.to_string()).clicked() {
                    events.push(StudioPanelEvent::GenerateNote(template));
                }
            }
        });
        ui.separator();

        ui.horizontal(|ui| {
            ui.strong("Notes");
            ui.weak(props.notes.len().to_string());
        });
        for note in props.notes.iter().rev().take(5) {
            if ui.link(&note.title).clicked() {
                events.push(StudioPanelEvent::OpenNotes);
            }
        }

        StudioPanelOutput { events }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn template_labels_match_titles() {
        for template in NoteTemplate::iter() {
            assert_eq!(template.to_string(), template.title());
        }
    }
}
