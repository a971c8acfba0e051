// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::candidate::Candidate;
use crate::config::options::ExportOptions;
use crate::csv::to_export_string;

/// Write a single export file based on ExportOptions (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export_single<S: AsRef<str>>(
    export: &ExportOptions,
    headers: &[S],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = export.include_headers.then_some(headers);
    let contents = to_export_string(headers, rows, export.delim());

    fs::write(&path, contents)?;
    Ok(path)
}

/// The candidate table: `Candidate::ordered_fields()` as columns, one row each.
pub fn write_candidates(
    export: &ExportOptions,
    candidates: &[Candidate],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let rows: Vec<Vec<String>> = candidates.iter().map(Candidate::as_list).collect();
    write_export_single(export, Candidate::ordered_fields(), &rows)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
