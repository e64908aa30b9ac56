use super::StatefulComponent;
use crate::util::{MemoizedSearch, format_date, highlight_preview};
use strum::IntoEnumIterator;
use tome_core::{ResultKind, SearchFilter, Workspace};

/// Query input, filter chips, and the unified result list. The scan itself
/// lives in `tome_core::search`; this component only caches and renders it.
#[derive(Default)]
pub struct SearchView {
    query: String,
    filter: SearchFilter,
    memo: MemoizedSearch,
}

pub struct SearchViewProps<'a> {
    pub workspace: &'a Workspace,
}

pub struct SearchViewOutput {
    pub events: Vec<SearchViewEvent>,
}

pub enum SearchViewEvent {
    OpenDocument(String),
}

impl StatefulComponent for SearchView {
    type Props<'a> = SearchViewProps<'a>;
    type Output = SearchViewOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        ui.heading("Search");
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.query)
                .desired_width(f32::INFINITY)
                .hint_text("Search across all your content"),
        );

        ui.horizontal(|ui| {
            for filter in SearchFilter::iter() {
                ui.selectable_value(&mut self.filter, filter, filter.to_string());
            }
        });
        ui.separator();

        let hits = self.memo.results(props.workspace, &self.query, self.filter);

        if self.query.trim().is_empty() {
            ui.weak("Type to search documents, notes and chat messages.");
            return SearchViewOutput { events };
        }

        if hits.is_empty() {
            ui.weak(format!("No results for \"{}\"", self.query.trim()));
            return SearchViewOutput { events };
        }

        let plural = if hits.len() == 1 { "" } else { "s" };
        ui.weak(format!("{} result{plural}", hits.len()));
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for hit in hits {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            if hit.kind == ResultKind::Document {
                                if ui.link(&hit.title).clicked() {
                                    events.push(SearchViewEvent::OpenDocument(
                                        hit.id.clone(),
                                    ));
                                }
                            } else {
                                ui.strong(&hit.title);
                            }
                            ui.label(
                                egui::RichText::new(hit.kind.to_string()).small().weak(),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(format_date(&hit.timestamp))
                                            .small()
                                            .weak(),
                                    );
                                },
                            );
                        });

                        if !hit.metadata.is_empty() {
                            ui.label(
                                egui::RichText::new(&hit.metadata).small().weak(),
                            );
                        }

                        let job =
                            highlight_preview(ui.style(), &hit.preview, &hit.match_ranges);
                        ui.label(job);
                    });
                    ui.add_space(4.0);
                }
            });

        SearchViewOutput { events }
    }
}
