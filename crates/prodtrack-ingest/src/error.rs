use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        source: calamine::XlsxError,
    },
    #[error("failed to read sheet '{name}': {source}")]
    SheetRead {
        name: String,
        source: calamine::XlsxError,
    },
    #[error("sheet '{name}' has no header row")]
    EmptySheet { name: String },
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no .xlsx workbook found in {path} or its parent")]
    NoWorkbook { path: PathBuf },
    #[error(transparent)]
    Model(#[from] prodtrack_model::ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
