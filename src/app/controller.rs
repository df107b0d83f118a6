use super::actions::Action;
use super::controllers::{analysis_controller, tree_controller};
use super::state::AppState;

impl AppState {
    pub fn apply_action(&mut self, action: Action) {
        // Keep ordering stable (domain -> view)
        if analysis_controller::handle(self, &action) {
            return;
        }
        if tree_controller::handle(self, &action) {
            return;
        }
    }
}
