mod app;
mod format;
mod model;
mod platform;
mod scan;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Project Analyzer",
        native_options,
        Box::new(|_cc| Box::new(app::AppState::default())),
    )
}
