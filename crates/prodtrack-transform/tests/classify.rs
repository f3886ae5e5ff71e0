use prodtrack_model::{ColumnRole, Table, Value};
use prodtrack_transform::{classify_columns, classify_values};

fn tracking_table() -> Table {
    let mut table = Table::new(vec![
        "ORDER NO".to_string(),
        "CUSTOMER".to_string(),
        "CUTTING".to_string(),
        "WELDING".to_string(),
        "ASSEMBLY".to_string(),
        "INSPECTION".to_string(),
    ]);
    let rows = vec![
        vec![
            Value::Int(1),
            Value::Text("ACME".to_string()),
            Value::Int(1),
            Value::Missing,
            Value::Text("COMPLETED".to_string()),
            Value::Missing,
        ],
        vec![
            Value::Int(2),
            Value::Text("BETA".to_string()),
            Value::Int(0),
            Value::Missing,
            Value::Text("NOT_STARTED".to_string()),
            Value::Missing,
        ],
        vec![
            Value::Int(3),
            Value::Text("ACME 2".to_string()),
            Value::Missing,
            Value::Missing,
            Value::Text("IN_PROGRESS".to_string()),
            Value::Missing,
        ],
    ];
    for row in rows {
        table.push_row(row).expect("push row");
    }
    table
}

#[test]
fn binary_flag_column_is_a_sub_step() {
    let values = vec![Value::Int(1), Value::Int(0), Value::Missing];
    assert_eq!(classify_values(&values), ColumnRole::SubStep);
}

#[test]
fn textual_status_column_is_a_main_step() {
    let values = vec![
        Value::Text("COMPLETED".to_string()),
        Value::Text("NOT_STARTED".to_string()),
    ];
    assert_eq!(classify_values(&values), ColumnRole::MainStep);
}

#[test]
fn any_text_decides_regardless_of_vocabulary() {
    // The deciding signal is the presence of text, not a status vocabulary.
    let values = vec![Value::Int(1), Value::Text("N/A".to_string())];
    assert_eq!(classify_values(&values), ColumnRole::MainStep);
}

#[test]
fn all_missing_column_is_a_sub_step() {
    let values = vec![Value::Missing, Value::Missing];
    assert_eq!(classify_values(&values), ColumnRole::SubStep);
}

#[test]
fn info_columns_are_excluded_and_order_is_kept() {
    let table = tracking_table();
    let info = vec!["ORDER NO".to_string(), "CUSTOMER".to_string()];
    let classification = classify_columns(&table, &info);
    assert_eq!(classification.sub_steps, vec!["CUTTING", "WELDING", "INSPECTION"]);
    assert_eq!(classification.main_steps, vec!["ASSEMBLY"]);
    assert_eq!(classification.role_of("ASSEMBLY"), Some(ColumnRole::MainStep));
    assert_eq!(classification.role_of("CUTTING"), Some(ColumnRole::SubStep));
    assert_eq!(classification.role_of("ORDER NO"), None);
}

#[test]
fn info_column_matching_is_exact() {
    let table = tracking_table();
    let info = vec!["order no".to_string()];
    let classification = classify_columns(&table, &info);
    // "ORDER NO" is all-numeric, so without an exact info match it lands
    // on the sub-step side.
    assert!(classification.sub_steps.contains(&"ORDER NO".to_string()));
}
