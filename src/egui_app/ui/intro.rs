use eframe::egui::{self, RichText, Ui};

use super::{buttons, card, heading, style};
use crate::egui_app::content;
use crate::egui_app::state::DemoAction;

pub(super) fn render(ui: &mut Ui, actions: &mut Vec<DemoAction>) {
    let palette = style::palette();
    heading(ui, content::INTRO_TITLE);
    card(ui, |ui| {
        ui.label(RichText::new(content::INTRO_SUMMARY).color(palette.text_primary));
        ui.add_space(6.0);
        for point in content::INTRO_POINTS {
            ui.label(RichText::new(format!("• {point}")).color(palette.text_primary));
        }
        ui.add_space(6.0);
        egui::CollapsingHeader::new("Glossary")
            .default_open(false)
            .show(ui, |ui| {
                for item in content::GLOSSARY {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(item.term).strong().color(palette.accent_ice));
                        ui.label(RichText::new(item.definition).color(palette.text_muted));
                    });
                }
            });
    });
    ui.add_space(12.0);
    if ui.add(buttons::action_button(content::START_BUTTON)).clicked() {
        actions.push(DemoAction::ToggleDemo);
    }
}
