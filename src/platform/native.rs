use rfd::FileDialog;
use std::path::PathBuf;

use super::Platform;

#[derive(Clone, Debug, Default)]
pub struct NativePlatform;

impl NativePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for NativePlatform {
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        FileDialog::new().set_title(title).pick_folder()
    }
}
