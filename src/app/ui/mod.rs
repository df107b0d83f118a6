pub mod files_panel;
pub mod summary_panel;
pub mod top_bar;
pub mod tree_panel;
