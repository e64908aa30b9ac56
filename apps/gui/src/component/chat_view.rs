use super::StatefulComponent;
use crate::util::format_timestamp;
use tome_core::{ChatMessage, MessageAuthor};

/// Transcript plus the message input. The transcript is append-only; the
/// component only ever emits `Send`.
#[derive(Default)]
pub struct ChatView {
    input: String,
}

pub struct ChatViewProps<'a> {
    pub messages: &'a [ChatMessage],
}

pub struct ChatViewOutput {
    pub events: Vec<ChatViewEvent>,
}

pub enum ChatViewEvent {
    Send(String),
}

impl StatefulComponent for ChatView {
    type Props<'a> = ChatViewProps<'a>;
    type Output = ChatViewOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        egui::TopBottomPanel::bottom("chat_input").show_inside(ui, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let send_clicked = ui
                    .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let send_clicked = ui.button("Send").clicked();

                        let resp = ui.add(
                            egui::TextEdit::singleline(&mut self.input)
                                .desired_width(ui.available_width())
                                .hint_text("Ask about your sources"),
                        );
                        let enter = resp.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if enter {
                            resp.request_focus();
                        }

                        send_clicked || enter
                    })
                    .inner;

                if send_clicked && !self.input.trim().is_empty() {
                    events.push(ChatViewEvent::Send(self.input.trim().to_string()));
                    self.input.clear();
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in props.messages {
                        let author = match message.author {
                            MessageAuthor::User => "You",
                            MessageAuthor::Ai => "Tome",
                        };
                        ui.horizontal(|ui| {
                            ui.strong(author);
                            ui.label(
                                egui::RichText::new(format_timestamp(&message.timestamp))
                                    .small()
                                    .weak(),
                            );
                        });
                        ui.label(&message.content);
                        ui.add_space(8.0);
                    }
                });
        });

        ChatViewOutput { events }
    }
}
