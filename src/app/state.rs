use std::path::PathBuf;
use std::sync::Arc;

use crate::model::AnalysisResult;
use crate::platform::{NativePlatform, Platform};

use super::actions::{ExpandCmd, Tab};

#[derive(Clone, Debug, Default)]
pub struct InputsState {
    /// Root of the last confirmed directory selection.
    pub root: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub struct ResultsState {
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
}

#[derive(Clone, Debug, Default)]
pub struct TreeState {
    /// One-shot expand/collapse command, consumed after the tree renders.
    pub expand_cmd: Option<ExpandCmd>,
}

pub struct AppState {
    pub platform: Arc<dyn Platform>,
    pub inputs: InputsState,
    pub results: ResultsState,
    pub ui: UiState,
    pub tree: TreeState,
    pub last_window_title: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_platform(Arc::new(NativePlatform::new()))
    }
}

impl AppState {
    pub fn with_platform(platform: Arc<dyn Platform>) -> Self {
        Self {
            platform,
            inputs: InputsState::default(),
            results: ResultsState::default(),
            ui: UiState::default(),
            tree: TreeState::default(),
            last_window_title: None,
        }
    }
}
