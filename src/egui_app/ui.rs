//! egui renderer for the stacking tutorial.
//!
//! Widgets read from the controller's current state and record
//! [`DemoAction`]s; the actions are dispatched once the frame has been laid
//! out, so every frame renders a single consistent snapshot.

use eframe::egui::{self, Frame, Margin, RichText, Ui};

use crate::config::DemoConfig;
use crate::egui_app::controller::DemoController;
use crate::egui_app::state::{DemoAction, DemoPage};

mod buttons;
mod demo_page;
mod intro;
pub mod style;

/// Smallest window that still fits the demo card without clipping.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(520.0, 560.0);
const CONTENT_WIDTH: f32 = 640.0;

/// Renders the tutorial using the shared controller state.
pub struct EguiApp {
    controller: DemoController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            controller: DemoController::new(config),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_page(&self, ui: &mut Ui, actions: &mut Vec<DemoAction>) {
        match self.controller.state().page {
            DemoPage::Intro => intro::render(ui, actions),
            DemoPage::Demo => demo_page::render(
                ui,
                self.controller.state(),
                self.controller.view(),
                self.controller.config(),
                actions,
            ),
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let palette = style::palette();
        let mut actions = Vec::new();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        self.render_page(ui, &mut actions);
                    });
                });
            });
        if self.controller.dispatch_all(actions) {
            ctx.request_repaint();
        }
    }
}

/// Bordered block used for the theory text and the demo controls.
fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::new()
        .fill(style::palette().bg_secondary)
        .stroke(style::card_stroke())
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents)
                .inner
        })
        .inner
}

fn heading(ui: &mut Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(
        RichText::new(text)
            .heading()
            .strong()
            .color(style::palette().text_primary),
    );
    ui.add_space(8.0);
}
