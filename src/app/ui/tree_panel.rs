use eframe::egui;

use crate::format;
use crate::model::{AnalysisResult, HierarchyNode};

use super::super::actions::{Action, ExpandCmd};
use super::super::state::AppState;

fn show_node(ui: &mut egui::Ui, node: &HierarchyNode, path: &str, expand_cmd: Option<ExpandCmd>) {
    match node {
        HierarchyNode::Folder { children, .. } => {
            // Stable ID independent of ui id-stack, so expansion survives
            // unrelated layout changes.
            let id = egui::Id::new(("dir", path));

            let mut st =
                egui::collapsing_header::CollapsingState::load_with_default_open(ui.ctx(), id, false);

            if let Some(cmd) = expand_cmd {
                match cmd {
                    ExpandCmd::ExpandAll => st.set_open(true),
                    ExpandCmd::CollapseAll => st.set_open(false),
                }
            }

            st.show_header(ui, |ui| {
                ui.add(egui::Label::new(format::node_label(node)).wrap(false));
            })
            .body(|ui| {
                for child in children {
                    let child_path = format!("{}/{}", path, child.name());
                    show_node(ui, child, &child_path, expand_cmd);
                }
            });
        }
        HierarchyNode::File { .. } => {
            ui.add(egui::Label::new(format::node_label(node)).wrap(false));
        }
    }
}

pub fn tree_panel(ui: &mut egui::Ui, state: &mut AppState, res: &AnalysisResult) -> Vec<Action> {
    let mut actions = vec![];

    // One-shot expand/collapse command
    let expand_cmd = state.tree.expand_cmd;

    ui.horizontal(|ui| {
        if ui.button("Expand all").clicked() {
            actions.push(Action::ExpandAll);
        }
        if ui.button("Collapse all").clicked() {
            actions.push(Action::CollapseAll);
        }
    });

    ui.add_space(6.0);

    ui.push_id("tree_panel", |ui| {
        egui::ScrollArea::both()
            .id_source("tree_scroll_both")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let root_id = egui::Id::new(("dir", "root"));

                let mut root_state =
                    egui::collapsing_header::CollapsingState::load_with_default_open(
                        ui.ctx(),
                        root_id,
                        true,
                    );

                if let Some(cmd) = expand_cmd {
                    match cmd {
                        ExpandCmd::ExpandAll => root_state.set_open(true),
                        ExpandCmd::CollapseAll => root_state.set_open(false),
                    }
                }

                root_state
                    .show_header(ui, |ui| {
                        ui.add(egui::Label::new(format::node_label(&res.root)).wrap(false));
                    })
                    .body(|ui| {
                        if let HierarchyNode::Folder { children, .. } = &res.root {
                            for child in children {
                                let child_path = format!("root/{}", child.name());
                                show_node(ui, child, &child_path, expand_cmd);
                            }
                        }
                    });
            });
    });

    // Consume the one-shot command so it doesn't keep forcing open/close
    // every frame.
    state.tree.expand_cmd = None;

    actions
}
