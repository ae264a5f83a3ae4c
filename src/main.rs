use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use eframe::egui;

use trajview::app::TrajViewApp;
use trajview::data::loader;
use trajview::spec;
use trajview::state::AppState;

/// Fixed input path, matching the original inspection workflow: run the tool
/// from the directory the trajectory was exported into.
const DEFAULT_CSV: &str = "trajectory.csv";

/// Optional user-defined chart variants, appended to the built-ins.
const VIEWS_FILE: &str = "views.json";

fn main() -> Result<()> {
    env_logger::init();

    let table = loader::load(Path::new(DEFAULT_CSV)).context("cannot load trajectory data")?;

    let mut views = spec::builtin_views();
    let views_path = Path::new(VIEWS_FILE);
    if views_path.exists() {
        views.extend(spec::read_views(views_path)?);
    }

    let mut state = AppState::new(views);
    state.set_table(table, PathBuf::from(DEFAULT_CSV));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the user closes the viewer window.
    eframe::run_native(
        "Trajview – Trajectory Inspector",
        options,
        Box::new(move |_cc| Ok(Box::new(TrajViewApp::new(state)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
