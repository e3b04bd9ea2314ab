//! Helpers to convert demo state into egui-facing view structs.

use crate::egui_app::state::DemoState;
use crate::stacking::{BASE_MODEL_COUNT, BASE_MODELS, StackingError, evaluate};

/// Message shown in place of the meta output when the weights cannot be averaged.
pub const INVALID_WEIGHTS_MESSAGE: &str = "Weights sum to zero; meta-learner output is undefined";

/// Formatted prediction for one base model.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseRowView {
    pub name: &'static str,
    pub value: String,
}

/// Meta-learner output, or the reason there is none.
#[derive(Clone, Debug, PartialEq)]
pub enum MetaView {
    Value(String),
    Invalid(String),
}

impl MetaView {
    pub fn is_invalid(&self) -> bool {
        matches!(self, MetaView::Invalid(_))
    }
}

/// Everything the demo page displays that is derived from the state.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoView {
    pub sample_label: String,
    pub base_rows: [BaseRowView; BASE_MODEL_COUNT],
    pub meta: MetaView,
}

/// Run the stacking computation for `state` and format every number.
pub fn demo_view(state: &DemoState, decimals: usize) -> DemoView {
    let outcome = evaluate(state.sample, state.weights);
    let base_rows = std::array::from_fn(|index| BaseRowView {
        name: BASE_MODELS[index].name,
        value: outcome
            .base
            .get(index)
            .map(|value| format_number(value, decimals))
            .unwrap_or_default(),
    });
    let meta = match outcome.meta {
        Ok(value) => MetaView::Value(format_number(value, decimals)),
        Err(StackingError::InvalidWeightSum { .. }) => {
            MetaView::Invalid(INVALID_WEIGHTS_MESSAGE.to_string())
        }
    };
    DemoView {
        sample_label: format_number(state.sample, decimals),
        base_rows,
        meta,
    }
}

/// Fixed-precision display, with `-0.00` folded into `0.00`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}
