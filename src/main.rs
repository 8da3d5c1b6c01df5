mod app;
mod inference;
mod reading;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::AerogelApp;
use eframe::egui;

/// Directory searched for the model bundle when none is given on the
/// command line.
const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let artifact_dir: PathBuf = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(|| DEFAULT_ARTIFACT_DIR.into());

    // Artifacts are loaded exactly once, before the event loop starts; a
    // missing or malformed bundle aborts startup.
    let predictor = inference::loader::load_bundle(&artifact_dir)
        .with_context(|| format!("loading model bundle from {}", artifact_dir.display()))?;
    log::info!("Loaded model bundle from {}", artifact_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 400.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Aerogel Property Predictor",
        options,
        Box::new(move |_cc| Ok(Box::new(AerogelApp::new(predictor)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
