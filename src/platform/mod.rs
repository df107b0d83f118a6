use std::path::PathBuf;

/// OS / environment specific behavior lives behind this seam so the app
/// state can be driven without a real desktop session in tests.
pub trait Platform: Send + Sync {
    /// Open the native folder picker. `None` means the user cancelled.
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;
}

pub mod native;

pub use native::NativePlatform;
