use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StudentsExplorerApp {
    pub state: AppState,
}

impl StudentsExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for StudentsExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset description ----
        egui::TopBottomPanel::top("description_panel").show(ctx, |ui| {
            panels::description_panel(ui, &self.state);
        });

        // ---- Bottom panel: conclusion + status line ----
        egui::TopBottomPanel::bottom("conclusion_panel").show(ctx, |ui| {
            panels::conclusion_panel(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state);
        });
    }
}
