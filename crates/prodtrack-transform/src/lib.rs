pub mod classify;
pub mod company;
pub mod error;
pub mod export;

pub use classify::{ColumnClassification, classify_columns, classify_values};
pub use company::{base_company, base_company_name, group_companies};
pub use error::{Result, TransformError};
pub use export::{ExportRecord, export_records, json_value};
