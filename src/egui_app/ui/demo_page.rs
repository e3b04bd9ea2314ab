use eframe::egui::{self, RichText, SliderClamping, Ui};

use super::{buttons, card, heading, style};
use crate::config::DemoConfig;
use crate::egui_app::content;
use crate::egui_app::state::{DemoAction, DemoState};
use crate::egui_app::view_model::{DemoView, MetaView};
use crate::stacking::BASE_MODELS;

const WEIGHT_FIELD_WIDTH: f32 = 50.0;
/// Fraction of a weight step moved per point of drag.
const WEIGHT_DRAG_SPEED: f64 = 0.05;

pub(super) fn render(
    ui: &mut Ui,
    state: &DemoState,
    view: &DemoView,
    config: &DemoConfig,
    actions: &mut Vec<DemoAction>,
) {
    let palette = style::palette();
    heading(ui, content::DEMO_TITLE);
    card(ui, |ui| {
        ui.label(RichText::new(content::DEMO_INSTRUCTIONS).color(palette.text_muted));
        ui.add_space(10.0);
        render_sample_slider(ui, state, view, config, actions);
        ui.add_space(16.0);
        render_base_predictions(ui, view);
        ui.add_space(16.0);
        render_weight_inputs(ui, state, config, actions);
        ui.add_space(18.0);
        render_meta_output(ui, view);
    });
    ui.add_space(12.0);
    if ui.add(buttons::action_button(content::BACK_BUTTON)).clicked() {
        actions.push(DemoAction::ToggleDemo);
    }
}

fn render_sample_slider(
    ui: &mut Ui,
    state: &DemoState,
    view: &DemoView,
    config: &DemoConfig,
    actions: &mut Vec<DemoAction>,
) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        ui.label(RichText::new("Input sample:").color(palette.text_primary));
        ui.label(
            RichText::new(&view.sample_label)
                .strong()
                .color(palette.text_primary),
        );
    });
    let [min, max] = config.sample_range;
    let mut sample = state.sample;
    let slider = egui::Slider::new(&mut sample, min..=max)
        .step_by(config.sample_step)
        .show_value(false)
        .clamping(SliderClamping::Always);
    if ui.add(slider).changed() {
        actions.push(DemoAction::SetSample(sample));
    }
}

fn render_base_predictions(ui: &mut Ui, view: &DemoView) {
    let palette = style::palette();
    ui.label(
        RichText::new("Base Model Predictions:")
            .strong()
            .color(palette.text_primary),
    );
    for (index, row) in view.base_rows.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("• {}:", row.name)).color(palette.text_primary));
            ui.label(RichText::new(&row.value).color(style::base_model_color(index)));
        });
    }
}

fn render_weight_inputs(
    ui: &mut Ui,
    state: &DemoState,
    config: &DemoConfig,
    actions: &mut Vec<DemoAction>,
) {
    let palette = style::palette();
    ui.label(
        RichText::new("Meta-learner Weights:")
            .strong()
            .color(palette.text_primary),
    );
    let [min, max] = config.weight_range;
    ui.horizontal_wrapped(|ui| {
        for (index, model) in BASE_MODELS.iter().enumerate() {
            let Some(mut weight) = state.weights.get(index) else {
                continue;
            };
            ui.label(RichText::new(format!("{}:", model.name)).color(palette.text_primary));
            let drag = egui::DragValue::new(&mut weight)
                .speed(config.weight_step * WEIGHT_DRAG_SPEED)
                .range(min..=max)
                .max_decimals(2);
            let response = ui.add_sized([WEIGHT_FIELD_WIDTH, 20.0], drag);
            if response.changed() {
                actions.push(DemoAction::SetWeight {
                    index,
                    value: config.snap_weight(weight),
                });
            }
            ui.add_space(8.0);
        }
    });
}

fn render_meta_output(ui: &mut Ui, view: &DemoView) {
    let palette = style::palette();
    ui.horizontal_wrapped(|ui| {
        ui.label(
            RichText::new("Meta-learner Output:")
                .strong()
                .color(palette.text_primary),
        );
        match &view.meta {
            MetaView::Value(value) => {
                ui.label(RichText::new(value).size(18.0).color(palette.meta_output));
            }
            MetaView::Invalid(message) => {
                ui.label(RichText::new(message).color(palette.warning));
            }
        }
    });
}
