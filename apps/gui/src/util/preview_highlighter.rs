use egui::TextStyle;
use egui::text::{LayoutJob, TextFormat};
use std::ops::Range;

/// Build the layout job for a result preview, painting the matched byte
/// ranges with the selection background.
///
/// `ranges` must be ascending, non-overlapping byte ranges into `text`, which
/// is what [`tome_core::match_ranges`] produces.
pub fn highlight_preview(
    style: &egui::Style,
    text: &str,
    ranges: &[Range<usize>],
) -> LayoutJob {
    let font_id = TextStyle::Body.resolve(style);
    let normal = TextFormat {
        font_id: font_id.clone(),
        color: style.visuals.text_color(),
        ..Default::default()
    };
    let matched = TextFormat {
        font_id,
        color: style.visuals.strong_text_color(),
        background: style.visuals.selection.bg_fill,
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    let mut last_end = 0;
    for range in ranges {
        if range.start > last_end {
            job.append(&text[last_end..range.start], 0.0, normal.clone());
        }
        job.append(&text[range.clone()], 0.0, matched.clone());
        last_end = range.end;
    }
    if last_end < text.len() {
        job.append(&text[last_end..], 0.0, normal);
    }

    job
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn job_covers_whole_text() {
        let style = egui::Style::default();
        let job = highlight_preview(&style, "alpha beta alpha", &[0..5, 11..16]);

        assert_eq!(job.text, "alpha beta alpha");
        // matched, gap, matched
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[0].byte_range, 0..5);
        assert_eq!(job.sections[1].byte_range, 5..11);
        assert_eq!(job.sections[2].byte_range, 11..16);
    }

    #[test]
    fn no_ranges_yields_single_section() {
        let style = egui::Style::default();
        let job = highlight_preview(&style, "plain", &[]);

        assert_eq!(job.sections.len(), 1);
        assert_eq!(job.sections[0].byte_range, 0..5);
    }
}
