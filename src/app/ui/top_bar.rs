use eframe::egui;

use super::super::actions::Action;
use super::super::state::AppState;

pub fn top_bar(_ctx: &egui::Context, ui: &mut egui::Ui, state: &AppState) -> Vec<Action> {
    let mut actions = vec![];

    ui.horizontal(|ui| {
        if ui.button("Select directory").clicked() {
            actions.push(Action::PickDirectory);
        }

        ui.separator();

        match &state.inputs.root {
            Some(p) => {
                ui.monospace(p.display().to_string());
            }
            None => {
                ui.weak("(no directory selected)");
            }
        }
    });

    actions
}
