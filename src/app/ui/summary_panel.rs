use eframe::egui;

use crate::format;
use crate::model::AnalysisResult;

/// Persistent grand-total line below the tab views.
pub fn summary_panel(ui: &mut egui::Ui, res: Option<&AnalysisResult>) {
    match res {
        Some(res) => {
            ui.label(format::totals_label(res.total_lines, res.total_chars));
        }
        None => {
            ui.weak("No scan yet");
        }
    }
}
