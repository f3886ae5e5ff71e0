pub mod company;
pub mod error;
pub mod steps;
pub mod table;
pub mod value;

pub use company::CompanyGroup;
pub use error::{ModelError, Result};
pub use steps::{ColumnRole, StepGroup, StepGroupConfig};
pub use table::Table;
pub use value::Value;
