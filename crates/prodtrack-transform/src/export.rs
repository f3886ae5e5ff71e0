//! Record filtering and JSON-friendly value normalization.

use serde_json::{Map, Number};
use tracing::debug;

use prodtrack_model::{Table, Value};

use crate::error::Result;

/// One exported row: source column names to normalized JSON values, in
/// source column order (`serde_json` is built with `preserve_order`).
pub type ExportRecord = Map<String, serde_json::Value>;

/// Filters `table` to rows with a non-missing identifier and normalizes
/// every cell for JSON output.
///
/// Row order is preserved, and every source column appears in every record.
pub fn export_records(table: &Table, id_column: &str) -> Result<Vec<ExportRecord>> {
    let id_index = table.require_column(id_column)?;
    let mut records = Vec::new();
    for row in &table.rows {
        if row[id_index].is_missing() {
            continue;
        }
        let mut record = ExportRecord::new();
        for (column, value) in table.columns.iter().zip(row) {
            record.insert(column.clone(), json_value(value));
        }
        records.push(record);
    }
    debug!(
        id_column,
        total = table.rows.len(),
        exported = records.len(),
        "filtered rows for export"
    );
    Ok(records)
}

/// Normalizes one cell for export: missing becomes null, a float that is
/// exactly integral becomes an integer, everything else passes through
/// verbatim.
pub fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Missing => serde_json::Value::Null,
        Value::Int(n) => serde_json::Value::Number(Number::from(*n)),
        Value::Float(x) => {
            if let Some(n) = integral_float(*x) {
                serde_json::Value::Number(Number::from(n))
            } else {
                Number::from_f64(*x)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
        }
        Value::Text(text) => serde_json::Value::String(text.clone()),
    }
}

/// Returns the exact integer form of `x`, when one exists.
fn integral_float(x: f64) -> Option<i64> {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    if x.is_finite() && x.fract() == 0.0 && x.abs() <= EXACT_LIMIT {
        Some(x as i64)
    } else {
        None
    }
}
