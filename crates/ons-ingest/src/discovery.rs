//! Raw file discovery and latest-file selection.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::error::{IngestError, Result};

/// A CSV file in the raw directory with its modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl RawFile {
    /// File name as UTF-8, or an empty string for non-UTF-8 names.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Check for .csv extension (case-insensitive)
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Lists the raw CSV files whose name starts with `prefix`, with mtimes.
pub fn list_raw_files(dir: &Path, prefix: &str) -> Result<Vec<RawFile>> {
    let mut matches = Vec::new();
    for path in list_csv_files(dir)? {
        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(prefix));
        if !name_matches {
            continue;
        }
        let modified = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .map_err(|e| IngestError::FileRead {
                path: path.clone(),
                source: e,
            })?;
        matches.push(RawFile { path, modified });
    }
    Ok(matches)
}

/// Returns the most recently modified raw file for a series prefix.
///
/// Files sharing the latest modification time are ordered by name, and the
/// greatest name wins; extract-stage names embed a sortable timestamp.
pub fn latest_raw_file(dir: &Path, prefix: &str) -> Result<RawFile> {
    let candidates = list_raw_files(dir, prefix)?;
    debug!(
        dir = %dir.display(),
        prefix,
        candidates = candidates.len(),
        "scanned raw directory"
    );
    candidates
        .into_iter()
        .max_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
        })
        .ok_or_else(|| IngestError::NoRawFile {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &[
            "cpih_l55o_20240101_090000.csv",
            "awe_kac3_20240101_090000.csv",
            "notes.txt",
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, "Title,x\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("cpih_l55o_archive.csv")).unwrap();

        dir
    }

    #[test]
    fn test_list_csv_files_skips_dirs_and_other_extensions() {
        let dir = create_test_dir();
        let files = list_csv_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("awe_kac3_20240101_090000.csv"));
    }

    #[test]
    fn test_list_raw_files_filters_prefix() {
        let dir = create_test_dir();
        let files = list_raw_files(dir.path(), "cpih_l55o_").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), "cpih_l55o_20240101_090000.csv");
    }

    #[test]
    fn test_missing_directory() {
        let dir = create_test_dir();
        let missing = dir.path().join("nope");
        assert!(matches!(
            latest_raw_file(&missing, "cpih_l55o_"),
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }
}
