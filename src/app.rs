use std::path::Path;

use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::plot::{self, Metric};
use crate::ui::{panels, summary, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StudentCostApp {
    pub state: AppState,
}

impl StudentCostApp {
    /// Create the app and load the dataset at `path` once. A failed load
    /// leaves an empty dashboard with the error in the top bar.
    pub fn new(path: &Path) -> Self {
        let mut state = AppState::default();
        state.load_path(path);
        Self { state }
    }
}

impl eframe::App for StudentCostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: overview and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a cost of living CSV  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Affordable Student Living & Travel in Germany");
            ui.label(
                "Explore cost of living, rent, transport, and meal expenses across major German cities.",
            );
            ui.separator();

            if let Some(record) = state.selected_record() {
                summary::city_overview(ui, record);
                ui.separator();
            }

            let visible = state.visible_records();
            if visible.is_empty() {
                ui.label("No cities fall inside the selected cost range.");
            }

            for metric in Metric::ALL {
                plot::bar_chart(ui, metric, &visible, &state.colors);
                ui.add_space(8.0);
            }
            plot::rent_vs_transport(ui, &visible, &state.colors);
            ui.add_space(8.0);

            egui::CollapsingHeader::new("Working set")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    table::working_set_table(ui, &visible);
                });
        });
}
