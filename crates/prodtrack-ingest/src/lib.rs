pub mod discovery;
pub mod error;
pub mod workbook;

pub use discovery::find_workbook;
pub use error::{IngestError, Result};
pub use workbook::{read_sheet, table_from_rows, value_from_cell};
