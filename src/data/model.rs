use super::error::ColumnNotFoundError;

// ---------------------------------------------------------------------------
// ColumnTable – the parsed CSV as named, equal-length numeric columns
// ---------------------------------------------------------------------------

/// A parsed trajectory file: named `f64` columns in header order, all of the
/// same length. Row order is the time axis and is preserved verbatim from the
/// file; nothing here sorts or validates monotonicity.
///
/// Construction goes through [`ColumnTable::new`] (used by the loader), which
/// upholds the equal-length invariant, so a table in hand is always
/// consistent.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    rows: usize,
}

impl ColumnTable {
    /// Build a table from header names and per-column values.
    ///
    /// Panics if the column count or any column length disagrees; the loader
    /// is the only caller and fills all columns row by row.
    pub(crate) fn new(names: Vec<String>, columns: Vec<Vec<f64>>) -> Self {
        assert_eq!(names.len(), columns.len());
        let rows = columns.first().map_or(0, Vec::len);
        assert!(columns.iter().all(|c| c.len() == rows));
        ColumnTable {
            names,
            columns,
            rows,
        }
    }

    /// Column names in header order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of data rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Look up a column by exact (case-sensitive) name.
    pub fn column(&self, name: &str) -> Result<&[f64], ColumnNotFoundError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| ColumnNotFoundError(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ColumnTable {
        ColumnTable::new(
            vec!["time".into(), "velocity".into()],
            vec![vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]],
        )
    }

    #[test]
    fn column_lookup_preserves_order() {
        let t = table();
        assert_eq!(t.names(), &["time".to_string(), "velocity".to_string()]);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.column("velocity").unwrap(), &[0.0, 2.0, 4.0]);
    }

    #[test]
    fn missing_column_names_the_column() {
        let t = table();
        let err = t.column("maxVelocity").unwrap_err();
        assert_eq!(err, ColumnNotFoundError("maxVelocity".to_string()));
        assert!(err.to_string().contains("maxVelocity"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let t = table();
        assert!(t.column("Time").is_err());
        assert!(t.column("time").is_ok());
    }
}
