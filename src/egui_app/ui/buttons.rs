use eframe::egui::{self, RichText};

use crate::egui_app::ui::style;

pub(super) fn action_button(label: &str) -> egui::Button<'_> {
    egui::Button::new(RichText::new(label).color(style::palette().text_primary))
        .min_size(egui::vec2(160.0, 28.0))
}
