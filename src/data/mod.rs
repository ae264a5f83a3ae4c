/// Data layer: core types, errors, and CSV loading.
///
/// Architecture:
/// ```text
///   trajectory.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ColumnTable (all-or-nothing)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ColumnTable  │  named equal-length f64 columns, row order = time axis
///   └─────────────┘
/// ```
pub mod error;
pub mod loader;
pub mod model;
