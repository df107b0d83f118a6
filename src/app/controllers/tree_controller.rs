use crate::app::actions::{Action, ExpandCmd};
use crate::app::state::AppState;

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::ExpandAll => {
            state.tree.expand_cmd = Some(ExpandCmd::ExpandAll);
            true
        }
        Action::CollapseAll => {
            state.tree.expand_cmd = Some(ExpandCmd::CollapseAll);
            true
        }
        _ => false,
    }
}
