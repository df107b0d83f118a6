pub mod actions;
pub mod controller;
pub mod controllers;
pub mod state;
pub mod ui;

mod app;

pub use state::AppState;
