use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::model::AnalysisResult;

/// Flat table of every counted source file, sorted by line count
/// descending (path ascending on ties).
pub fn files_panel(ui: &mut egui::Ui, res: &AnalysisResult) {
    let rows = res.sorted_stats();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(360.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("File");
            });
            header.col(|ui| {
                ui.strong("Lines");
            });
            header.col(|ui| {
                ui.strong("Chars");
            });
        })
        .body(|mut body| {
            for stat in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.add(egui::Label::new(stat.path.as_str()).wrap(false));
                    });
                    row.col(|ui| {
                        ui.monospace(format!("{:>8}", stat.lines));
                    });
                    row.col(|ui| {
                        ui.monospace(format!("{:>8}", stat.chars));
                    });
                });
            }
        });
}
