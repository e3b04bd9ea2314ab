//! Library exports for the stacking demo binaries, tests and benchmarks.
/// Application directory resolution.
pub mod app_dirs;
/// TOML presentation settings.
pub mod config;
/// egui UI modules.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Simulated base models and the weighted-average meta-learner.
pub mod stacking;
