use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – view selector and column listing
// ---------------------------------------------------------------------------

/// Render the left panel: one selectable entry per chart variant, then the
/// columns of the loaded table.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Views");
    ui.separator();

    let mut clicked_view = None;
    for (i, view) in state.views.iter().enumerate() {
        if ui
            .selectable_label(state.active_view == i, &view.name)
            .clicked()
        {
            clicked_view = Some(i);
        }
    }
    if let Some(i) = clicked_view {
        state.set_view(i);
    }

    ui.separator();
    ui.heading("Columns");

    let Some(table) = &state.table else {
        ui.label("No file loaded.");
        return;
    };

    ui.label(format!("{} rows", table.rows()));
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for name in table.names() {
                ui.monospace(name);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(source) = &state.source {
            ui.label(source.display().to_string());
        }
        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows × {} columns",
                table.rows(),
                table.names().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user pick another trajectory CSV. A failed load keeps the current
/// table and shows the error in the status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open trajectory data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load(&path) {
            Ok(table) => {
                state.set_table(table, path);
            }
            Err(e) => {
                log::error!("failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
