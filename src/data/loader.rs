use std::fs::File;
use std::path::Path;

use super::error::LoadError;
use super::model::ColumnTable;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a trajectory CSV into a [`ColumnTable`].
///
/// Expected layout: a header row of column names, then one row of
/// comma-separated floats per sample. Whitespace around cells is tolerated.
/// Any defect (missing file, empty file, duplicate header name, row width
/// mismatch, non-numeric cell) fails the whole load; row indices in errors
/// are 1-based over the data rows.
pub fn load(path: &Path) -> Result<ColumnTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // flexible: width mismatches are our diagnostic, not the csv crate's.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let names: Vec<String> = headers.iter().map(str::to_string).collect();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(LoadError::DuplicateColumn {
                path: path.to_path_buf(),
                name: name.clone(),
            });
        }
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() != names.len() {
            return Err(LoadError::RowWidth {
                path: path.to_path_buf(),
                row,
                expected: names.len(),
                found: record.len(),
            });
        }
        for (col, cell) in record.iter().enumerate() {
            let value = cell.parse::<f64>().map_err(|_| LoadError::BadNumber {
                path: path.to_path_buf(),
                row,
                column: names[col].clone(),
                value: cell.to_string(),
            })?;
            columns[col].push(value);
        }
    }

    let table = ColumnTable::new(names, columns);
    log::info!(
        "loaded {}: {} rows, columns {:?}",
        path.display(),
        table.rows(),
        table.names()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// Write `content` to a uniquely named file in the system temp dir.
    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("trajview-{}-{name}", std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_csv_in_file_order() {
        let path = fixture("ok.csv", "time,velocity\n0,0\n1,2\n2,4\n");
        let table = load(&path).unwrap();
        assert_eq!(table.names(), &["time".to_string(), "velocity".to_string()]);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.column("time").unwrap(), &[0.0, 1.0, 2.0]);
        assert_eq!(table.column("velocity").unwrap(), &[0.0, 2.0, 4.0]);
    }

    #[test]
    fn trims_cell_whitespace() {
        let path = fixture("ws.csv", "time, position\n0.0, 1.5\n0.02 ,2.5\n");
        let table = load(&path).unwrap();
        assert_eq!(table.column("position").unwrap(), &[1.5, 2.5]);
    }

    #[test]
    fn header_only_file_yields_zero_rows() {
        let path = fixture("header.csv", "time,rotation\n");
        let table = load(&path).unwrap();
        assert_eq!(table.rows(), 0);
        assert_eq!(table.column("rotation").unwrap(), &[] as &[f64]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("no-such-trajectory.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("no-such-trajectory.csv"));
    }

    #[test]
    fn empty_file_is_reported_as_empty() {
        let path = fixture("empty.csv", "");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
        assert!(err.to_string().contains("file is empty"));
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let path = fixture("dup.csv", "time,velocity,time\n0,1,2\n");
        let err = load(&path).unwrap_err();
        match err {
            LoadError::DuplicateColumn { name, .. } => assert_eq!(name, "time"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_row_names_its_index() {
        let path = fixture("short.csv", "time,velocity\n0,0\n1\n2,4\n");
        let err = load(&path).unwrap_err();
        match err {
            LoadError::RowWidth {
                row,
                expected,
                found,
                ..
            } => {
                assert_eq!(row, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_cell_names_row_and_column() {
        let path = fixture("nan.csv", "time,velocity\n0,0\n1,fast\n");
        let err = load(&path).unwrap_err();
        match err {
            LoadError::BadNumber {
                row, column, value, ..
            } => {
                assert_eq!(row, 2);
                assert_eq!(column, "velocity");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
