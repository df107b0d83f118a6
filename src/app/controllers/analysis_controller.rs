use tracing::warn;

use crate::app::actions::{Action, ExpandCmd};
use crate::app::state::AppState;
use crate::scan;

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::PickDirectory => {
            state.pick_directory_and_scan();
            true
        }
        _ => false,
    }
}

impl AppState {
    /// Open the folder picker; a cancelled dialog leaves everything
    /// (including a previously displayed result) untouched.
    pub(crate) fn pick_directory_and_scan(&mut self) {
        let Some(p) = self.platform.pick_folder("Select a directory to analyze") else {
            return;
        };

        self.inputs.root = Some(p);
        self.run_scan();
    }

    /// Scan the selected root synchronously, replacing the prior result
    /// wholesale. The scan has no partial-result path: any failure clears
    /// the display and surfaces the error instead.
    pub(crate) fn run_scan(&mut self) {
        let Some(root) = self.inputs.root.clone() else {
            self.results.error = Some("Select a directory first.".into());
            return;
        };

        self.results.result = None;
        self.results.error = None;

        match scan::scan_directory(&root) {
            Ok(res) => {
                self.results.result = Some(res);
                self.tree.expand_cmd = Some(ExpandCmd::ExpandAll);
            }
            Err(e) => {
                warn!(root = %root.display(), error = %format!("{:#}", e), "scan failed");
                self.results.error = Some(format!("{:#}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Stands in for the folder-picker dialog: `Some` = user chose a
    /// directory, `None` = user cancelled.
    struct FakePicker(Option<PathBuf>);

    impl Platform for FakePicker {
        fn pick_folder(&self, _title: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn choosing_a_directory_populates_the_result() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.py"), "x = 1\n").unwrap();

        let mut state = AppState::with_platform(Arc::new(FakePicker(Some(tmp.path().into()))));
        state.apply_action(Action::PickDirectory);

        let res = state.results.result.as_ref().unwrap();
        assert_eq!(res.total_lines, 1);
        assert!(state.results.error.is_none());
    }

    #[test]
    fn cancelling_the_picker_preserves_the_previous_result() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.py"), "x = 1\ny = 2\n").unwrap();

        let mut state = AppState::with_platform(Arc::new(FakePicker(Some(tmp.path().into()))));
        state.apply_action(Action::PickDirectory);
        let first = state.results.result.clone().unwrap();

        state.platform = Arc::new(FakePicker(None));
        state.apply_action(Action::PickDirectory);

        assert_eq!(state.results.result.as_ref(), Some(&first));
        assert_eq!(state.inputs.root.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn rescan_replaces_the_prior_result_wholesale() {
        let tmp_a = TempDir::new().unwrap();
        fs::write(tmp_a.path().join("a.py"), "x = 1\n").unwrap();
        let tmp_b = TempDir::new().unwrap();
        fs::write(tmp_b.path().join("b.py"), "x = 1\ny = 2\nz = 3\n").unwrap();

        let mut state = AppState::with_platform(Arc::new(FakePicker(Some(tmp_a.path().into()))));
        state.apply_action(Action::PickDirectory);
        assert_eq!(state.results.result.as_ref().unwrap().total_lines, 1);

        state.platform = Arc::new(FakePicker(Some(tmp_b.path().into())));
        state.apply_action(Action::PickDirectory);

        let res = state.results.result.as_ref().unwrap();
        assert_eq!(res.total_lines, 3);
        assert_eq!(res.file_stats.len(), 1);
        assert!(res.file_stats.keys().all(|k| k.ends_with("b.py")));
    }

    #[test]
    fn failed_scan_surfaces_an_error() {
        let missing = PathBuf::from("/definitely/not/a/real/directory");
        let mut state = AppState::with_platform(Arc::new(FakePicker(Some(missing))));
        state.apply_action(Action::PickDirectory);

        assert!(state.results.result.is_none());
        assert!(state.results.error.is_some());
    }
}
