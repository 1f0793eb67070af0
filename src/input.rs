use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{SortError, SortResult};

/// List the regular files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into. When `filter` is given only files whose name matches it
/// are returned.
pub fn list_input_files(dir: &Path, filter: Option<&Regex>) -> SortResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| SortError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SortError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(r) = filter {
            let name = entry.file_name();
            if !r.is_match(&name.to_string_lossy()) {
                log::debug!("Skipping {}, does not match {}", path.display(), r);
                continue;
            }
        }
        files.push(path);
    }
    files.sort();
    log::info!("Found {} input files in {}", files.len(), dir.display());
    Ok(files)
}
