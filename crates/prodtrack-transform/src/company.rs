//! Customer label canonicalization and per-company order grouping.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use prodtrack_model::{CompanyGroup, Table, Value};

use crate::error::Result;

// Trailing plain number: "ACME 3" -> "ACME".
static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\d+\s*$").expect("trailing number pattern"));
// Trailing dash/underscore suffix, digits optional: "EFATUR-1" -> "EFATUR-",
// and the bare dash left behind is stripped too.
static TRAILING_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[-_]\s*\d*\s*$").expect("trailing dash pattern"));

/// Derives the canonical base company name from a raw customer label.
///
/// Trims, uppercases (Unicode case mapping, so the non-ASCII letters in the
/// source text fold correctly), then strips a trailing number and a trailing
/// dash/underscore suffix. Each rule runs exactly once, not to a fixpoint:
/// `"EFATUR-1"` becomes `"EFATUR"`, but `"EFATUR-1-2"` only loses the final
/// group and becomes `"EFATUR-1"`.
pub fn base_company_name(raw: &str) -> String {
    let name = raw.trim().to_uppercase();
    let name = TRAILING_NUMBER.replace(&name, "");
    let name = TRAILING_DASH.replace(&name, "");
    name.trim().to_string()
}

/// Normalizes one label cell; missing cells have no base name.
pub fn base_company(value: &Value) -> Option<String> {
    value.to_label().map(|label| base_company_name(&label))
}

/// Groups order rows by base company name.
///
/// Rows with a missing or empty base name are discarded. Groups come back
/// sorted by descending order count; ties keep first-encountered order.
/// Each group's variants are the distinct raw labels seen, in order of
/// first appearance.
pub fn group_companies(table: &Table, customer_column: &str) -> Result<Vec<CompanyGroup>> {
    let column = table.require_column(customer_column)?;
    let mut groups: Vec<CompanyGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    for value in table.column_values(column) {
        let Some(raw) = value.to_label() else {
            continue;
        };
        let base = base_company_name(&raw);
        if base.is_empty() {
            continue;
        }
        let index = *index_by_name.entry(base.clone()).or_insert_with(|| {
            groups.push(CompanyGroup {
                base_company: base,
                total_orders: 0,
                variants: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[index];
        group.total_orders += 1;
        if !group.variants.contains(&raw) {
            group.variants.push(raw);
        }
    }
    // Stable sort keeps insertion order within equal counts.
    groups.sort_by(|a, b| b.total_orders.cmp(&a.total_orders));
    debug!(
        customer_column,
        companies = groups.len(),
        "grouped order rows by base company"
    );
    Ok(groups)
}
