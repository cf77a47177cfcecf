mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::StudentCostApp;
use eframe::egui;
use state::DEFAULT_DATASET_PATH;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Affordable Student Living in Germany",
        options,
        Box::new(|_cc| {
            Ok(Box::new(StudentCostApp::new(Path::new(
                DEFAULT_DATASET_PATH,
            ))))
        }),
    )
}
