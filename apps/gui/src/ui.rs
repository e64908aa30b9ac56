use crate::config::UiConfig;
use egui::{FontId, TextStyle};
use std::collections::BTreeMap;

pub fn setup_ui(ctx: &egui::Context, cfg: &UiConfig) {
    let mut style = (*ctx.style()).clone();

    // UI Scale
    if let Some(scale) = cfg.scale {
        ctx.set_pixels_per_point(scale);
    }

    // Font Size
    let font_size = cfg.font_size;
    let text_styles: BTreeMap<_, _> = [
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.35)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
    ]
    .into();
    style.text_styles = text_styles;

    ctx.set_style(style);
}
