//! Top-level duplicate finding: walk a tree, run the pipeline, summarize.
//!
//! # Overview
//!
//! [`DuplicateFinder`] ties the scanner and the pass pipeline together.
//! It validates the root directory up front, enumerates files, feeds them
//! through the three passes, and assembles a [`ScanSummary`] for
//! presentation.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, summary) = finder.find_duplicates(Path::new(".")).unwrap();
//! println!(
//!     "{} groups, {} bytes reclaimable",
//!     groups.len(),
//!     summary.reclaimable_space
//! );
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::ConfigError;
use crate::scanner::{FileEntry, Walker, WalkerConfig};

use super::grouper::DuplicateGroup;
use super::pipeline::{PassPipeline, PassStats, PipelineConfig, PipelineError};

/// Errors from a full find run.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The scan configuration was invalid; nothing was scanned.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The pipeline aborted (strict mode read failure).
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Summary statistics for one complete run.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Files enumerated under the root
    pub total_files: usize,
    /// Combined size of all enumerated files in bytes
    pub total_size: u64,
    /// Confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Duplicate files beyond the first copy in each group
    pub duplicate_files: usize,
    /// Bytes reclaimable by keeping one copy per group
    pub reclaimable_space: u64,
    /// Files dropped by read failures across all passes
    pub failed_files: usize,
    /// Traversal errors that were skipped
    pub walk_errors: usize,
    /// Wall-clock time spent enumerating files
    pub walk_duration: Duration,
    /// Total wall-clock time for the run
    pub scan_duration: Duration,
    /// Per-pass statistics in execution order
    pub pass_stats: Vec<PassStats>,
}

/// Walks a directory tree and finds byte-identical files.
#[derive(Debug)]
pub struct DuplicateFinder {
    walker_config: WalkerConfig,
    pipeline_config: PipelineConfig,
}

impl DuplicateFinder {
    /// Create a finder with explicit walker and pipeline configuration.
    #[must_use]
    pub fn new(walker_config: WalkerConfig, pipeline_config: PipelineConfig) -> Self {
        Self {
            walker_config,
            pipeline_config,
        }
    }

    /// Create a finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(WalkerConfig::default(), PipelineConfig::default())
    }

    /// Find duplicate files under `root`.
    ///
    /// Traversal errors on individual entries are logged and counted but
    /// do not abort the run. Per-file read failures follow the pipeline's
    /// strict-mode setting.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Config`] when `root` does not exist or is
    /// not a directory, before any pass begins, and
    /// [`FinderError::Pipeline`] when strict mode aborts on a read
    /// failure.
    pub fn find_duplicates(
        &self,
        root: &Path,
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        if !root.exists() {
            return Err(ConfigError::RootNotFound(root.to_path_buf()).into());
        }
        if !root.is_dir() {
            return Err(ConfigError::RootNotADirectory(root.to_path_buf()).into());
        }

        let scan_start = Instant::now();
        let mut summary = ScanSummary::default();

        log::info!("Scanning {}", root.display());

        let walk_start = Instant::now();
        let walker = Walker::new(root, self.walker_config.clone());
        let mut files: Vec<FileEntry> = Vec::new();
        for entry in walker.walk() {
            match entry {
                Ok(file) => {
                    summary.total_size += file.size;
                    files.push(file);
                }
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    summary.walk_errors += 1;
                }
            }
        }
        summary.walk_duration = walk_start.elapsed();
        summary.total_files = files.len();

        log::info!(
            "Enumerated {} files ({} bytes) in {:?}",
            summary.total_files,
            summary.total_size,
            summary.walk_duration
        );

        let pipeline = PassPipeline::new(self.pipeline_config.clone());
        let (groups, pass_stats) = pipeline.run(files)?;

        summary.failed_files = pass_stats.iter().map(|s| s.failed_files).sum();
        summary.duplicate_groups = groups.len();
        summary.duplicate_files = groups
            .iter()
            .map(|g| g.len().saturating_sub(1))
            .sum();
        summary.reclaimable_space = groups.iter().map(DuplicateGroup::wasted_space).sum();
        summary.pass_stats = pass_stats;
        summary.scan_duration = scan_start.elapsed();

        log::info!(
            "Found {} duplicate groups ({} redundant files, {} bytes reclaimable) in {:?}",
            summary.duplicate_groups,
            summary.duplicate_files,
            summary.reclaimable_space,
            summary.scan_duration
        );

        Ok((groups, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn touch(path: &Path, content: &[u8]) {
        File::create(path).unwrap().write_all(content).unwrap();
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let finder = DuplicateFinder::with_defaults();
        let err = finder.find_duplicates(&missing).unwrap_err();
        assert!(matches!(err, FinderError::Config(ConfigError::RootNotFound(_))));
    }

    #[test]
    fn test_file_root_is_config_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file");
        touch(&file, b"x");

        let finder = DuplicateFinder::with_defaults();
        let err = finder.find_duplicates(&file).unwrap_err();
        assert!(matches!(
            err,
            FinderError::Config(ConfigError::RootNotADirectory(_))
        ));
    }

    #[test]
    fn test_empty_tree_yields_empty_summary() {
        let dir = tempdir().unwrap();

        let finder = DuplicateFinder::with_defaults();
        let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();
        assert!(groups.is_empty());
        assert_eq!(summary.total_files, 0);
        assert_eq!(summary.walk_errors, 0);
        assert_eq!(summary.pass_stats.len(), 3);
    }

    #[test]
    fn test_summary_counts() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a"), b"dup");
        touch(&dir.path().join("b"), b"dup");
        touch(&dir.path().join("c"), b"dup");
        touch(&dir.path().join("d"), b"lone");

        let finder = DuplicateFinder::with_defaults();
        let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(summary.total_files, 4);
        assert_eq!(summary.total_size, 13);
        assert_eq!(summary.duplicate_groups, 1);
        assert_eq!(summary.duplicate_files, 2);
        assert_eq!(summary.reclaimable_space, 6);
    }

    #[test]
    fn test_exclusion_reaches_walker() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("skipme")).unwrap();
        touch(&dir.path().join("a"), b"dup");
        touch(&dir.path().join("skipme/b"), b"dup");

        let finder = DuplicateFinder::new(
            WalkerConfig::new(vec!["skipme".to_string()]),
            PipelineConfig::default(),
        );
        let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();
        assert!(groups.is_empty());
        assert_eq!(summary.total_files, 1);
    }
}
