#[derive(Clone, Copy, Debug)]
pub enum ExpandCmd {
    ExpandAll,
    CollapseAll,
}

/// The two result views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Structure,
    Files,
}

#[derive(Clone, Debug)]
pub enum Action {
    /// Open the folder picker and, if a directory is chosen, scan it.
    PickDirectory,
    ExpandAll,
    CollapseAll,
}
