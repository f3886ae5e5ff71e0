//! XLSX loading: one named sheet into an in-memory [`Table`].

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tracing::debug;

use prodtrack_model::{Table, Value};

use crate::error::{IngestError, Result};

/// Reads one named sheet from an XLSX workbook.
///
/// The first row of the used range is the header row; header cells are
/// trimmed, and columns with an empty header are dropped. Rows whose kept
/// cells are all missing are skipped.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<Table> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| IngestError::WorkbookOpen {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), sheets = ?workbook.sheet_names(), "workbook opened");
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| IngestError::SheetRead {
            name: sheet.to_string(),
            source,
        })?;
    let rows: Vec<&[Data]> = range.rows().collect();
    let table = table_from_rows(sheet, &rows)?;
    debug!(
        sheet,
        columns = table.columns.len(),
        rows = table.rows.len(),
        "sheet loaded"
    );
    Ok(table)
}

/// Builds a [`Table`] from raw workbook rows, first row being the header.
pub fn table_from_rows<R: AsRef<[Data]>>(sheet: &str, rows: &[R]) -> Result<Table> {
    let Some(header_row) = rows.first() else {
        return Err(IngestError::EmptySheet {
            name: sheet.to_string(),
        });
    };
    // Keep only columns with a non-empty header, remembering their indices.
    let mut columns = Vec::new();
    let mut kept = Vec::new();
    for (index, cell) in header_row.as_ref().iter().enumerate() {
        let header = header_text(cell);
        if !header.is_empty() {
            columns.push(header);
            kept.push(index);
        }
    }
    if columns.is_empty() {
        return Err(IngestError::EmptySheet {
            name: sheet.to_string(),
        });
    }
    let mut table = Table::new(columns);
    for raw in rows.iter().skip(1) {
        let raw = raw.as_ref();
        let row: Vec<Value> = kept
            .iter()
            .map(|&index| raw.get(index).map(value_from_cell).unwrap_or(Value::Missing))
            .collect();
        if row.iter().all(Value::is_missing) {
            continue;
        }
        table.push_row(row)?;
    }
    Ok(table)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().trim_matches('\u{feff}').to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Maps a workbook cell to the model's scalar set.
///
/// Booleans become 0/1 integers and datetimes their serial number, keeping
/// both on the numeric side of column classification. Formula errors count
/// as missing.
pub fn value_from_cell(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Missing,
        Data::Int(n) => Value::Int(*n),
        Data::Float(x) => Value::Float(*x),
        Data::Bool(flag) => Value::Int(i64::from(*flag)),
        Data::String(text) => Value::Text(text.clone()),
        Data::DateTime(dt) => Value::Float(dt.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Value::Text(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_conversion_covers_scalar_set() {
        assert_eq!(value_from_cell(&Data::Empty), Value::Missing);
        assert_eq!(value_from_cell(&Data::Int(7)), Value::Int(7));
        assert_eq!(value_from_cell(&Data::Float(1.5)), Value::Float(1.5));
        assert_eq!(value_from_cell(&Data::Bool(true)), Value::Int(1));
        assert_eq!(
            value_from_cell(&Data::String("COMPLETED".to_string())),
            Value::Text("COMPLETED".to_string())
        );
    }

    #[test]
    fn first_row_becomes_headers() {
        let rows = vec![
            vec![
                Data::String("ID".to_string()),
                Data::String(" CUSTOMER ".to_string()),
            ],
            vec![Data::Int(1), Data::String("ACME 1".to_string())],
        ];
        let table = table_from_rows("orders", &rows).expect("build table");
        assert_eq!(table.columns, vec!["ID", "CUSTOMER"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][1], Value::Text("ACME 1".to_string()));
    }

    #[test]
    fn empty_header_columns_are_dropped() {
        let rows = vec![
            vec![
                Data::String("ID".to_string()),
                Data::Empty,
                Data::String("QTY".to_string()),
            ],
            vec![Data::Int(1), Data::String("stray".to_string()), Data::Float(2.0)],
        ];
        let table = table_from_rows("orders", &rows).expect("build table");
        assert_eq!(table.columns, vec!["ID", "QTY"]);
        assert_eq!(table.rows[0], vec![Value::Int(1), Value::Float(2.0)]);
    }

    #[test]
    fn short_rows_are_padded_and_blank_rows_skipped() {
        let rows = vec![
            vec![Data::String("ID".to_string()), Data::String("NOTE".to_string())],
            vec![Data::Int(1)],
            vec![Data::Empty, Data::Empty],
        ];
        let table = table_from_rows("orders", &rows).expect("build table");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec![Value::Int(1), Value::Missing]);
    }

    #[test]
    fn sheet_without_rows_is_an_error() {
        let rows: Vec<Vec<Data>> = Vec::new();
        let err = table_from_rows("orders", &rows).unwrap_err();
        assert!(matches!(err, IngestError::EmptySheet { .. }));
    }
}
