use eframe::egui;

use super::actions::Tab;
use super::ui;
use super::AppState;

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Native window title
        let dir_name = self
            .inputs
            .root
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or("(no directory)");
        let title = format!("Project Analyzer - {}", dir_name);
        if self.last_window_title.as_deref() != Some(title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_window_title = Some(title);
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui_top| {
            let actions = ui::top_bar::top_bar(ctx, ui_top, self);
            for a in actions {
                self.apply_action(a);
            }
        });

        egui::TopBottomPanel::bottom("totals").show(ctx, |ui_bottom| {
            ui::summary_panel::summary_panel(ui_bottom, self.results.result.as_ref());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.results.error {
                ui.colored_label(ui.visuals().error_fg_color, err);
                ui.add_space(6.0);
            }

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.ui.active_tab, Tab::Structure, "Project Structure");
                ui.selectable_value(&mut self.ui.active_tab, Tab::Files, "File List");
            });
            ui.separator();

            let res_opt = self.results.result.clone();
            match res_opt {
                Some(res) => match self.ui.active_tab {
                    Tab::Structure => {
                        let actions = ui::tree_panel::tree_panel(ui, self, &res);
                        for a in actions {
                            self.apply_action(a);
                        }
                    }
                    Tab::Files => {
                        ui::files_panel::files_panel(ui, &res);
                    }
                },
                None => {
                    ui.weak("Select a directory to analyze its structure.");
                }
            }
        });
    }
}
