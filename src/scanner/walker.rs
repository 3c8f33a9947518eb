//! Directory walker built on walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting regular files for duplicate detection. Traversal is
//! single-threaded and deterministic: entries are sorted by file name
//! within each directory.
//!
//! # Exclusion
//!
//! A directory whose full path contains any configured exclusion substring
//! is pruned: it is never descended into and none of its files appear in
//! the output. Matching is a plain substring test against the directory
//! path, not a glob or gitignore pattern.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig::new(vec!["node_modules".to_string()]);
//! let walker = Walker::new(Path::new("/home/user/projects"), config);
//! let files: Vec<_> = walker.walk().filter_map(Result::ok).collect();
//! println!("Found {} files", files.len());
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError, WalkerConfig};

/// Directory walker for file discovery.
///
/// Symbolic links are not followed; only regular files are yielded.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `config` - Walker configuration options
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Check whether a directory path matches any exclusion substring.
    fn is_excluded(&self, path: &Path) -> bool {
        if self.config.exclude.is_empty() {
            return false;
        }
        let path_str = path.to_string_lossy();
        self.config.exclude.iter().any(|e| path_str.contains(e))
    }

    /// Walk the directory tree, yielding file entries.
    ///
    /// Returns an iterator over [`FileEntry`] results. Errors are yielded
    /// as [`ScanError`] values rather than stopping iteration, so a single
    /// unreadable directory does not abort the walk.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                // Prune excluded directories; everything below them
                // disappears from the walk.
                if entry.file_type().is_dir() && self.is_excluded(entry.path()) {
                    log::debug!("Excluding directory: {}", entry.path().display());
                    return false;
                }
                true
            })
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    match entry.metadata() {
                        Ok(metadata) => {
                            log::trace!(
                                "Discovered file: {} ({} bytes)",
                                entry.path().display(),
                                metadata.len()
                            );
                            Some(Ok(FileEntry::new(entry.into_path(), metadata.len())))
                        }
                        Err(e) => Some(Err(classify_walkdir_error(entry.path().to_path_buf(), e))),
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| self.root.clone(), Path::to_path_buf);
                    Some(Err(classify_walkdir_error(path, e)))
                }
            })
    }
}

/// Convert a walkdir error into a [`ScanError`].
fn classify_walkdir_error(path: PathBuf, error: walkdir::Error) -> ScanError {
    match error.io_error().map(std::io::Error::kind) {
        Some(std::io::ErrorKind::NotFound) => ScanError::NotFound(path),
        Some(std::io::ErrorKind::PermissionDenied) => ScanError::PermissionDenied(path),
        _ => ScanError::Io {
            path,
            source: error
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error")),
        },
    }
}
