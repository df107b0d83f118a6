pub mod analysis_controller;
pub mod tree_controller;
