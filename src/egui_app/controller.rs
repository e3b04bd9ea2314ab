//! Owns the current demo state and bridges user actions to the egui UI.

use crate::config::DemoConfig;
use crate::egui_app::state::{DemoAction, DemoState};
use crate::egui_app::view_model::{self, DemoView};
use tracing::{debug, info, warn};

/// Holds the latest `DemoState` and a view derived from it.
pub struct DemoController {
    config: DemoConfig,
    state: DemoState,
    view: DemoView,
}

impl DemoController {
    pub fn new(config: DemoConfig) -> Self {
        let state = DemoState::from_config(&config);
        let view = view_model::demo_view(&state, config.display_decimals);
        Self {
            config,
            state,
            view,
        }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn view(&self) -> &DemoView {
        &self.view
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Apply one action. Returns `true` when the state changed.
    pub fn dispatch(&mut self, action: DemoAction) -> bool {
        let next = self.state.apply(action);
        if next == self.state {
            return false;
        }
        debug!(?action, sample = next.sample, weights = ?next.weights.0, "demo state updated");
        if next.page != self.state.page {
            info!(page = ?next.page, "switched tutorial page");
        }
        let was_invalid = self.view.meta.is_invalid();
        self.state = next;
        self.view = view_model::demo_view(&self.state, self.config.display_decimals);
        if self.view.meta.is_invalid() && !was_invalid {
            warn!(
                weights = ?self.state.weights.0,
                "meta-learner weights sum to zero; output hidden"
            );
        }
        true
    }

    /// Apply a frame's worth of actions in order. Returns `true` if any changed the state.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = DemoAction>) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) || changed)
    }
}
