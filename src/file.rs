// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::EXPORT_HEADERS;
use crate::config::options::ExportFormat;
use crate::csv::frequencies_to_string;

const DEFAULT_STEM: &str = "frequencies";

/// Write `(word, count)` rows as CSV/TSV.
/// A directory hint (`out/`) or existing directory gets `frequencies.<ext>` inside it.
/// Returns the final path written to.
pub fn export_frequencies(
    out: &Path,
    format: ExportFormat,
    rows: &[(String, u64)],
    include_headers: bool,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = resolve_out_path(out, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = include_headers.then_some(EXPORT_HEADERS);
    let contents = frequencies_to_string(rows, headers, format.delim());

    fs::write(&path, contents)?;
    logf!("exported {} rows to {}", rows.len(), path.display());
    Ok(path)
}

pub fn resolve_out_path(out: &Path, format: ExportFormat) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = PathBuf::from(normalize_separators(&out.to_string_lossy()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(format!("{DEFAULT_STEM}.{}", format.ext())))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
