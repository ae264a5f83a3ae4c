use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PlotSpec – chart variants as data
// ---------------------------------------------------------------------------

/// One subplot: a shared x column with one or more y columns overlaid.
///
/// `slot` is a zero-based (row, col) cell in the view's grid; panels without
/// a slot fill free cells in declaration order, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub x: String,
    pub ys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<(usize, usize)>,
}

impl PanelSpec {
    /// A bare x-vs-y panel; builders below add titles and labels.
    pub fn new(x: &str, ys: &[&str]) -> Self {
        PanelSpec {
            x: x.to_string(),
            ys: ys.iter().map(|y| y.to_string()).collect(),
            title: None,
            x_label: None,
            y_label: None,
            slot: None,
        }
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }

    pub fn at(mut self, row: usize, col: usize) -> Self {
        self.slot = Some((row, col));
        self
    }
}

/// A named chart variant: an ordered list of panels, optionally pinned to a
/// grid of the given (rows, cols). Without `grid`, panels stack vertically
/// (or the grid grows to fit explicit slots).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<(usize, usize)>,
    pub panels: Vec<PanelSpec>,
}

// ---------------------------------------------------------------------------
// Built-in views – the chart variants the original inspection scripts drew
// ---------------------------------------------------------------------------

/// The stock views over the trajectory schema. Adding a variant means adding
/// a value here (or a `views.json` entry), never new plotting code.
pub fn builtin_views() -> Vec<PlotSpec> {
    vec![
        PlotSpec {
            name: "Trajectory".to_string(),
            grid: Some((2, 3)),
            panels: vec![
                PanelSpec::new("x", &["y"])
                    .titled("Path")
                    .labels("X", "Y")
                    .at(0, 0),
                PanelSpec::new("time", &["f"])
                    .titled("Feedforward")
                    .labels("Time", "Feedforward")
                    .at(0, 1),
                PanelSpec::new("time", &["position"])
                    .titled("Position")
                    .labels("Time", "Position")
                    .at(1, 0),
                PanelSpec::new("time", &["velocity"])
                    .titled("Velocity")
                    .labels("Time", "Velocity")
                    .at(1, 1),
                PanelSpec::new("time", &["acceleration"])
                    .titled("Acceleration")
                    .labels("Time", "Acceleration")
                    .at(1, 2),
            ],
        },
        PlotSpec {
            name: "Rotation".to_string(),
            grid: None,
            panels: vec![PanelSpec::new("time", &["rotation"])
                .titled("Rotation")
                .labels("Time", "Rotation")],
        },
        PlotSpec {
            name: "Velocity limit".to_string(),
            grid: None,
            panels: vec![PanelSpec::new("time", &["velocity", "maxVelocity"])
                .titled("Velocity vs limit")
                .labels("Time", "Velocity")],
        },
        PlotSpec {
            name: "Path".to_string(),
            grid: None,
            panels: vec![PanelSpec::new("x", &["y"]).titled("Path").labels("X", "Y")],
        },
    ]
}

// ---------------------------------------------------------------------------
// views.json – optional user-defined views
// ---------------------------------------------------------------------------

/// Parse a JSON array of [`PlotSpec`]s. A malformed file is a hard error,
/// same as a malformed CSV.
pub fn read_views(path: &Path) -> Result<Vec<PlotSpec>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let views: Vec<PlotSpec> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_trajectory_view_matches_original_layout() {
        let views = builtin_views();
        let traj = &views[0];
        assert_eq!(traj.name, "Trajectory");
        assert_eq!(traj.grid, Some((2, 3)));
        assert_eq!(traj.panels.len(), 5);
        let slots: Vec<_> = traj.panels.iter().map(|p| p.slot.unwrap()).collect();
        assert_eq!(slots, vec![(0, 0), (0, 1), (1, 0), (1, 1), (1, 2)]);
        // subplot 233 of the 2x3 grid stays empty
        assert!(!slots.contains(&(0, 2)));
    }

    #[test]
    fn plot_spec_round_trips_through_json() {
        let spec = PlotSpec {
            name: "Custom".to_string(),
            grid: Some((1, 2)),
            panels: vec![
                PanelSpec::new("time", &["velocity", "maxVelocity"]).at(0, 1),
                PanelSpec::new("x", &["y"]).titled("Path"),
            ],
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: PlotSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn minimal_json_panel_needs_only_x_and_ys() {
        let json = r#"{"name":"V","panels":[{"x":"time","ys":["velocity"]}]}"#;
        let spec: PlotSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.grid, None);
        assert_eq!(spec.panels[0].slot, None);
        assert_eq!(spec.panels[0].title, None);
    }
}
