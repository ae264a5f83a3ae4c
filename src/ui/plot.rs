use eframe::egui::{vec2, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::series_palette;
use crate::figure::FigurePanel;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Figure grid (central panel)
// ---------------------------------------------------------------------------

const TITLE_HEIGHT: f32 = 22.0;
const CELL_MARGIN: f32 = 4.0;

/// Draw the cached figure as a grid of plot cells.
pub fn figure_grid(ui: &mut Ui, state: &AppState) {
    let Some(fig) = &state.figure else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No figure – load a trajectory CSV  (File → Open…)");
        });
        return;
    };
    if fig.rows == 0 || fig.cols == 0 {
        return;
    }

    let avail = ui.available_size();
    let cell_w = avail.x / fig.cols as f32;
    let cell_h = avail.y / fig.rows as f32;

    for row in 0..fig.rows {
        ui.horizontal(|ui: &mut Ui| {
            for col in 0..fig.cols {
                match fig.panels.iter().find(|p| p.slot == (row, col)) {
                    Some(panel) => panel_cell(ui, panel, cell_w, cell_h),
                    // matplotlib leaves unused subplot cells blank; so do we
                    None => {
                        ui.allocate_space(vec2(cell_w, cell_h));
                    }
                }
            }
        });
    }
}

/// One subplot: optional title above an egui plot of the panel's polylines.
fn panel_cell(ui: &mut Ui, panel: &FigurePanel, cell_w: f32, cell_h: f32) {
    let colors = series_palette(panel.lines.len());

    ui.vertical(|ui: &mut Ui| {
        ui.set_max_width(cell_w);
        let plot_h = if let Some(title) = &panel.title {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(title).strong());
            });
            cell_h - TITLE_HEIGHT
        } else {
            cell_h
        };

        let mut plot = Plot::new(format!("panel_{}_{}", panel.slot.0, panel.slot.1))
            .width(cell_w - CELL_MARGIN)
            .height(plot_h - CELL_MARGIN)
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true);
        if let Some(xl) = &panel.x_label {
            plot = plot.x_axis_label(xl);
        }
        if let Some(yl) = &panel.y_label {
            plot = plot.y_axis_label(yl);
        }
        if panel.lines.len() > 1 {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for (line, color) in panel.lines.iter().zip(colors) {
                let points: PlotPoints = line.points.iter().copied().collect();
                plot_ui.line(Line::new(points).name(&line.name).color(color).width(1.5));
            }
        });
    });
}
