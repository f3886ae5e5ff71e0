use crate::error::{ModelError, Result};
use crate::value::Value;

/// An in-memory sheet: ordered column names plus rows of cells.
///
/// Column order is stable and meaningful; every row holds exactly one cell
/// per column.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, refusing width mismatches.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Fail-fast column lookup; the caller must supply an exact name.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| ModelError::MissingColumn {
            name: name.to_string(),
        })
    }

    /// Iterates one column's cells in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec!["ID".to_string(), "NAME".to_string()]);
        table
            .push_row(vec![Value::Int(1), Value::Text("A".to_string())])
            .unwrap();
        table.push_row(vec![Value::Int(2), Value::Missing]).unwrap();
        table
    }

    #[test]
    fn require_column_finds_exact_name() {
        let table = sample();
        assert_eq!(table.require_column("NAME").unwrap(), 1);
    }

    #[test]
    fn require_column_rejects_unknown_name() {
        let table = sample();
        let err = table.require_column("name").unwrap_err();
        assert!(matches!(err, ModelError::MissingColumn { .. }));
    }

    #[test]
    fn push_row_rejects_width_mismatch() {
        let mut table = sample();
        let err = table.push_row(vec![Value::Int(3)]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::RowWidth {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn column_values_walks_rows_in_order() {
        let table = sample();
        let index = table.require_column("ID").unwrap();
        let ids: Vec<&Value> = table.column_values(index).collect();
        assert_eq!(ids, vec![&Value::Int(1), &Value::Int(2)]);
    }
}
