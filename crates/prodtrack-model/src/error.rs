use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column not found: {name}")]
    MissingColumn { name: String },
    #[error("row has {actual} cells, table has {expected} columns")]
    RowWidth { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
