use std::path::PathBuf;

use crate::data::model::ColumnTable;
use crate::figure::{self, Figure};
use crate::spec::PlotSpec;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
///
/// The table is immutable once loaded; switching views or opening another
/// file replaces the cached [`Figure`] wholesale, so the frame loop only
/// ever draws, never resolves columns.
pub struct AppState {
    /// Loaded table (None until a file loads successfully).
    pub table: Option<ColumnTable>,

    /// Path the current table came from.
    pub source: Option<PathBuf>,

    /// Available chart variants: built-ins plus any from views.json.
    pub views: Vec<PlotSpec>,

    /// Index into `views` of the view being shown.
    pub active_view: usize,

    /// Figure for the active view against the current table (cached).
    pub figure: Option<Figure>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(views: Vec<PlotSpec>) -> Self {
        AppState {
            table: None,
            source: None,
            views,
            active_view: 0,
            figure: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded table and re-render the active view.
    pub fn set_table(&mut self, table: ColumnTable, source: PathBuf) {
        self.table = Some(table);
        self.source = Some(source);
        self.status_message = None;
        self.rebuild_figure();
    }

    /// Switch the active view and re-render.
    pub fn set_view(&mut self, index: usize) {
        if index < self.views.len() {
            self.active_view = index;
            self.rebuild_figure();
        }
    }

    /// Re-resolve the active view against the table. A missing column drops
    /// the figure entirely (no partial render) and surfaces in the status
    /// line.
    pub fn rebuild_figure(&mut self) {
        let (Some(table), Some(view)) = (&self.table, self.views.get(self.active_view)) else {
            self.figure = None;
            return;
        };
        match figure::render(table, view) {
            Ok(fig) => {
                self.figure = Some(fig);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("cannot render view '{}': {e}", view.name);
                self.figure = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ColumnTable;
    use crate::spec::{PanelSpec, PlotSpec};

    fn views() -> Vec<PlotSpec> {
        vec![
            PlotSpec {
                name: "Velocity".to_string(),
                grid: None,
                panels: vec![PanelSpec::new("time", &["velocity"])],
            },
            PlotSpec {
                name: "Rotation".to_string(),
                grid: None,
                panels: vec![PanelSpec::new("time", &["rotation"])],
            },
        ]
    }

    fn table() -> ColumnTable {
        ColumnTable::new(
            vec!["time".into(), "velocity".into()],
            vec![vec![0.0, 1.0], vec![0.0, 2.0]],
        )
    }

    #[test]
    fn loading_a_table_renders_the_active_view() {
        let mut state = AppState::new(views());
        assert!(state.figure.is_none());
        state.set_table(table(), PathBuf::from("trajectory.csv"));
        let fig = state.figure.as_ref().unwrap();
        assert_eq!(fig.panels[0].lines[0].points.len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn switching_to_unsatisfiable_view_drops_figure_and_reports() {
        let mut state = AppState::new(views());
        state.set_table(table(), PathBuf::from("trajectory.csv"));
        state.set_view(1); // needs "rotation", which the table lacks
        assert!(state.figure.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("rotation"));
    }

    #[test]
    fn out_of_range_view_index_is_ignored() {
        let mut state = AppState::new(views());
        state.set_table(table(), PathBuf::from("trajectory.csv"));
        state.set_view(99);
        assert_eq!(state.active_view, 0);
        assert!(state.figure.is_some());
    }
}
