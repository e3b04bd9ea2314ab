//! egui front end: state, view model, controller and renderer for the demo.

pub mod content;
pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
