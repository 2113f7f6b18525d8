//! Synchronous file utilities for record directories.
//!
//! Provides the file discovery, unique-path allocation, and read/write
//! operations shared by the ingestion writers and the catalog builder.
//! Everything here is plain blocking `std::fs`: the tools run as one
//! synchronous invocation per submission or build.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Filename reserved for directory documentation, never treated as a record.
pub const RESERVED_DOC_FILENAME: &str = "README.md";

/// Extension used by record files (without dot).
pub const RECORD_EXTENSION: &str = "md";

/// Information about a discovered record file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension); doubles as the record id.
    pub stem: String,
}

/// List the record files (`*.md`, excluding `README.md`) directly inside
/// `dir`, sorted by stem.
///
/// A missing directory is not an error: it yields an empty list, matching
/// the catalog contract that absent input produces an empty catalog.
/// Subdirectories are not descended into.
pub fn list_records(dir: &Path) -> Result<Vec<FileInfo>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| Error::io_with_path(e, dir))? {
        let entry = entry.map_err(Error::Io)?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(RESERVED_DOC_FILENAME) {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        files.push(FileInfo { path, stem });
    }

    // Directory order is filesystem-dependent; sort by stem so catalog
    // output is deterministic.
    files.sort_by(|a, b| a.stem.cmp(&b.stem));

    Ok(files)
}

/// Find an unused path for `{stem}.{ext}` in `dir`.
///
/// Tries the base name first, then `{stem}-1.{ext}`, `{stem}-2.{ext}`,
/// … until a name that does not exist is found. The returned path is
/// guaranteed unused at call time only; the check-then-write pattern is
/// not safe against a second writer racing on the same directory, which
/// the single-invocation operational model rules out.
pub fn allocate_unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let mut path = dir.join(format!("{stem}.{ext}"));
    let mut n = 0u32;
    while path.exists() {
        n += 1;
        path = dir.join(format!("{stem}-{n}.{ext}"));
    }
    path
}

/// Read a file's contents as a string.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

/// Write `contents` to `path`, creating the parent directory if needed.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, contents).map_err(|e| Error::io_with_path(e, path))
}

/// Create `dir` (and any missing parents) if it does not exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| Error::io_with_path(e, dir))
}
