mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

use app::StudentsExplorerApp;
use state::AppState;

const DATASET_PATH: &str = "data/student-scores.csv";
const DESCRIPTION_PATH: &str = "data/description.txt";
const CONCLUSION_PATH: &str = "data/conclusion.txt";

fn main() -> Result<()> {
    env_logger::init();

    // The app has no purpose without its inputs: any load failure is fatal.
    let dataset = data::loader::load_file(Path::new(DATASET_PATH))
        .with_context(|| format!("loading dataset from {DATASET_PATH}"))?;
    let description = std::fs::read_to_string(DESCRIPTION_PATH)
        .with_context(|| format!("reading {DESCRIPTION_PATH}"))?;
    let conclusion = std::fs::read_to_string(CONCLUSION_PATH)
        .with_context(|| format!("reading {CONCLUSION_PATH}"))?;

    if dataset.is_empty() {
        log::warn!("Dataset {DATASET_PATH} contains no rows");
    }
    log::info!("Loaded {} students from {DATASET_PATH}", dataset.len());

    let state = AppState::new(dataset, description, conclusion);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Students Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(StudentsExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
