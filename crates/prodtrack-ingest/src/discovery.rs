//! Workbook discovery: find the source XLSX next to the working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Finds the workbook to analyze.
///
/// Picks the first `.xlsx` file (by name) in `dir`; when the directory holds
/// none, the parent directory is searched as a fallback. Office lock files
/// (`~$...`) are ignored.
pub fn find_workbook(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    if let Some(path) = first_xlsx(dir)? {
        debug!(path = %path.display(), "workbook discovered");
        return Ok(path);
    }
    if let Some(parent) = dir.parent().filter(|parent| parent.is_dir()) {
        if let Some(path) = first_xlsx(parent)? {
            debug!(path = %path.display(), "workbook discovered in parent directory");
            return Ok(path);
        }
    }
    Err(IngestError::NoWorkbook {
        path: dir.to_path_buf(),
    })
}

fn first_xlsx(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_xlsx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
            .unwrap_or(false);
        let is_lock_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with("~$"))
            .unwrap_or(false);
        if is_xlsx && !is_lock_file {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files.into_iter().next())
}
