use crate::data::error::ColumnNotFoundError;
use crate::data::model::ColumnTable;
use crate::spec::{PanelSpec, PlotSpec};

// ---------------------------------------------------------------------------
// Figure – a PlotSpec resolved against a ColumnTable
// ---------------------------------------------------------------------------

/// One y-series of a panel, already zipped into plot points. Point order is
/// table row order; nothing is sorted, dropped, or interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// The y column name, used for the legend.
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// A resolved panel pinned to a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct FigurePanel {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Zero-based (row, col) in the figure grid.
    pub slot: (usize, usize),
    pub lines: Vec<Polyline>,
}

/// The fully resolved figure: grid dimensions plus panels in spec order.
/// Building one cannot partially succeed; any missing column fails the whole
/// render before a single panel exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<FigurePanel>,
}

/// Resolve `spec` against `table`.
///
/// Every column of every panel is looked up before anything is built, so a
/// [`ColumnNotFoundError`] never leaves a half-made figure behind.
pub fn render(table: &ColumnTable, spec: &PlotSpec) -> Result<Figure, ColumnNotFoundError> {
    let mut resolved: Vec<Vec<Polyline>> = Vec::with_capacity(spec.panels.len());
    for panel in &spec.panels {
        resolved.push(resolve_lines(table, panel)?);
    }

    let (rows, cols, slots) = assign_slots(spec);
    let panels = spec
        .panels
        .iter()
        .zip(resolved)
        .zip(slots)
        .map(|((p, lines), slot)| FigurePanel {
            title: p.title.clone(),
            x_label: p.x_label.clone(),
            y_label: p.y_label.clone(),
            slot,
            lines,
        })
        .collect();

    Ok(Figure { rows, cols, panels })
}

fn resolve_lines(table: &ColumnTable, panel: &PanelSpec) -> Result<Vec<Polyline>, ColumnNotFoundError> {
    let xs = table.column(&panel.x)?;
    let mut lines = Vec::with_capacity(panel.ys.len());
    for y in &panel.ys {
        let ys = table.column(y)?;
        let points: Vec<[f64; 2]> = xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect();
        lines.push(Polyline {
            name: y.clone(),
            points,
        });
    }
    Ok(lines)
}

// ---------------------------------------------------------------------------
// Grid layout
// ---------------------------------------------------------------------------

/// Pin every panel to a grid cell.
///
/// Explicit slots are reserved first (a duplicate demotes the later panel to
/// the unslotted pool); unslotted panels then fill free cells in declaration
/// order, row-major. The grid starts from `spec.grid` (or a single column)
/// and grows as needed, so assignment never fails.
fn assign_slots(spec: &PlotSpec) -> (usize, usize, Vec<(usize, usize)>) {
    let n = spec.panels.len();
    if n == 0 {
        return (0, 0, Vec::new());
    }

    let (mut rows, mut cols) = match spec.grid {
        Some((r, c)) => (r.max(1), c.max(1)),
        None => {
            let any_slotted = spec.panels.iter().any(|p| p.slot.is_some());
            if any_slotted {
                (1, 1)
            } else {
                (n, 1)
            }
        }
    };
    for p in &spec.panels {
        if let Some((r, c)) = p.slot {
            rows = rows.max(r + 1);
            cols = cols.max(c + 1);
        }
    }

    // First pass: reserve explicit slots.
    let mut taken: Vec<(usize, usize)> = Vec::new();
    let mut assigned: Vec<Option<(usize, usize)>> = vec![None; n];
    for (i, p) in spec.panels.iter().enumerate() {
        if let Some(slot) = p.slot {
            if !taken.contains(&slot) {
                taken.push(slot);
                assigned[i] = Some(slot);
            }
        }
    }

    // Second pass: fill the rest row-major, growing downward if full.
    let mut next = 0usize;
    for slot in assigned.iter_mut().filter(|s| s.is_none()) {
        loop {
            let cell = (next / cols, next % cols);
            next += 1;
            if !taken.contains(&cell) {
                rows = rows.max(cell.0 + 1);
                taken.push(cell);
                *slot = Some(cell);
                break;
            }
        }
    }

    let slots = assigned.into_iter().map(|s| s.unwrap_or((0, 0))).collect();
    (rows, cols, slots)
}
