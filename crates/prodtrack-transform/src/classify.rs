//! Column role classification for production-tracking sheets.

use std::collections::HashSet;

use tracing::debug;

use prodtrack_model::{ColumnRole, Table, Value};

/// The SubStep/MainStep split of one sheet's tracking columns, in source
/// column order. Info columns are excluded entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnClassification {
    pub sub_steps: Vec<String>,
    pub main_steps: Vec<String>,
}

impl ColumnClassification {
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        if self.main_steps.iter().any(|name| name == column) {
            Some(ColumnRole::MainStep)
        } else if self.sub_steps.iter().any(|name| name == column) {
            Some(ColumnRole::SubStep)
        } else {
            None
        }
    }
}

/// Classifies a single column from its observed non-missing values.
///
/// Heuristic: any textual value makes the column a status column, whatever
/// the text says. All-numeric and all-missing columns count as sub-step
/// indicators.
pub fn classify_values<'a, I>(values: I) -> ColumnRole
where
    I: IntoIterator<Item = &'a Value>,
{
    let has_text = values
        .into_iter()
        .filter(|value| !value.is_missing())
        .any(|value| value.is_text());
    if has_text {
        ColumnRole::MainStep
    } else {
        ColumnRole::SubStep
    }
}

/// Classifies every column of `table` except the named info columns.
///
/// Info columns are identifiers and descriptive fields that are never step
/// indicators; matching is exact.
pub fn classify_columns(table: &Table, info_columns: &[String]) -> ColumnClassification {
    let info: HashSet<&str> = info_columns.iter().map(String::as_str).collect();
    let mut sub_steps = Vec::new();
    let mut main_steps = Vec::new();
    for (index, column) in table.columns.iter().enumerate() {
        if info.contains(column.as_str()) {
            continue;
        }
        match classify_values(table.column_values(index)) {
            ColumnRole::SubStep => sub_steps.push(column.clone()),
            ColumnRole::MainStep => main_steps.push(column.clone()),
        }
    }
    debug!(
        sub_steps = sub_steps.len(),
        main_steps = main_steps.len(),
        info = info.len(),
        "classified tracking columns"
    );
    ColumnClassification {
        sub_steps,
        main_steps,
    }
}
