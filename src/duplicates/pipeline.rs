//! Three-pass duplicate detection pipeline.
//!
//! # Overview
//!
//! The pipeline narrows a candidate set with progressively deeper scans:
//!
//! 1. **Screen**: hash one disk block from the start of every file
//! 2. **Refine**: hash a larger prefix of the screen-pass survivors
//! 3. **Confirm**: full-content SHA-256 of the refine-pass survivors
//!
//! Each pass's duplicate groups are flattened into the next pass's input,
//! losing the group boundaries; files whose digest never collided are
//! dropped. Only the confirm pass's groups are returned, so the final
//! answer carries no prefix-collision false positives.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::{PassPipeline, PipelineConfig};
//! use dupescan::scanner::{Walker, WalkerConfig, FileEntry};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! let files: Vec<FileEntry> = walker.walk().filter_map(Result::ok).collect();
//!
//! let pipeline = PassPipeline::new(PipelineConfig::default());
//! let (groups, stats) = pipeline.run(files).unwrap();
//! println!("{} duplicate groups after {} passes", groups.len(), stats.len());
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::progress::ProgressCallback;
use crate::scanner::{hash_file, FileEntry, HashAlgorithm, HashError, BLOCK_SIZE};

use super::grouper::{group_by_digest, DuplicateGroup};

/// Default multiplier from the screen scan size to the refine scan size.
pub const DEFAULT_REFINE_MULTIPLIER: u64 = 100;

/// The three ordered passes of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// First pass: one small prefix per file, cheap hash.
    Screen,
    /// Second pass: larger prefix of the screen survivors.
    Refine,
    /// Third pass: full content, cryptographically strong hash.
    Confirm,
}

impl Pass {
    /// All passes in execution order.
    pub const ALL: [Pass; 3] = [Pass::Screen, Pass::Refine, Pass::Confirm];

    /// Human-readable pass name for logs and errors.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pass::Screen => "screen",
            Pass::Refine => "refine",
            Pass::Confirm => "confirm",
        }
    }

    /// Hash algorithm used in this pass.
    ///
    /// The prefix passes use BLAKE3 for speed; the confirm pass uses
    /// SHA-256 because its digests are the final answer.
    #[must_use]
    pub fn algorithm(self) -> HashAlgorithm {
        match self {
            Pass::Screen | Pass::Refine => HashAlgorithm::Blake3,
            Pass::Confirm => HashAlgorithm::Sha256,
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for the pass pipeline.
///
/// Scan sizes are explicit parameters rather than module constants so
/// tests can run with tiny prefixes.
#[derive(Clone)]
pub struct PipelineConfig {
    /// Bytes hashed per file in the screen pass.
    pub screen_size: u64,
    /// Refine pass scan size as a multiple of `screen_size`.
    pub refine_multiplier: u64,
    /// Abort on the first read failure instead of skipping the file.
    pub strict: bool,
    /// Optional progress callback.
    pub progress: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("screen_size", &self.screen_size)
            .field("refine_multiplier", &self.refine_multiplier)
            .field("strict", &self.strict)
            .field("progress", &self.progress.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            screen_size: BLOCK_SIZE as u64,
            refine_multiplier: DEFAULT_REFINE_MULTIPLIER,
            strict: false,
            progress: None,
        }
    }
}

impl PipelineConfig {
    /// Set the screen pass scan size in bytes.
    #[must_use]
    pub fn with_screen_size(mut self, bytes: u64) -> Self {
        self.screen_size = bytes;
        self
    }

    /// Set the refine pass multiplier.
    #[must_use]
    pub fn with_refine_multiplier(mut self, multiplier: u64) -> Self {
        self.refine_multiplier = multiplier;
        self
    }

    /// Enable or disable strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = Some(callback);
        self
    }
}

/// Statistics from one pass.
#[derive(Debug, Default)]
pub struct PassStats {
    /// Pass name ("screen", "refine", "confirm")
    pub pass: &'static str,
    /// Files that entered this pass
    pub input_files: usize,
    /// Files successfully hashed
    pub hashed_files: usize,
    /// Files dropped due to read failures
    pub failed_files: usize,
    /// Read failures encountered
    pub errors: Vec<HashError>,
    /// Duplicate groups produced by this pass
    pub duplicate_groups: usize,
    /// Files surviving into the next pass (group members)
    pub surviving_files: usize,
    /// Wall-clock time spent in this pass
    pub duration: Duration,
}

impl PassStats {
    fn new(pass: Pass, input_files: usize) -> Self {
        Self {
            pass: pass.name(),
            input_files,
            ..Default::default()
        }
    }

    /// Percentage of input files eliminated by this pass.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.input_files == 0 {
            0.0
        } else {
            let eliminated = self.input_files - self.surviving_files;
            (eliminated as f64 / self.input_files as f64) * 100.0
        }
    }
}

/// Errors that abort the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// A file could not be read in strict mode.
    #[error("read failure in {pass} pass: {source}")]
    Read {
        /// Pass in which the failure occurred
        pass: &'static str,
        /// The underlying hash error, carrying the failing path
        #[source]
        source: HashError,
    },
}

/// The three-pass duplicate detection pipeline.
///
/// Passes run strictly in order with no stage skipping; each file is
/// opened, hashed, and closed before the next is touched.
#[derive(Debug)]
pub struct PassPipeline {
    config: PipelineConfig,
}

impl PassPipeline {
    /// Create a pipeline with the given configuration.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline with default scan sizes.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// Scan size for a pass; zero means the whole file.
    ///
    /// The refine size saturates on overflow: any prefix at least as
    /// long as the file already hashes its full content.
    fn scan_size(&self, pass: Pass) -> u64 {
        match pass {
            Pass::Screen => self.config.screen_size,
            Pass::Refine => self
                .config
                .screen_size
                .saturating_mul(self.config.refine_multiplier),
            Pass::Confirm => 0,
        }
    }

    /// Run all three passes over the given files.
    ///
    /// Returns the confirm pass's duplicate groups together with the
    /// per-pass statistics. Read failures drop the affected file and are
    /// recorded in the pass stats; in strict mode the first failure
    /// aborts instead.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Read`] in strict mode when a file cannot
    /// be hashed.
    pub fn run(
        &self,
        files: Vec<FileEntry>,
    ) -> Result<(Vec<DuplicateGroup>, Vec<PassStats>), PipelineError> {
        let mut survivors = files;
        let mut all_stats = Vec::with_capacity(Pass::ALL.len());
        let mut groups = Vec::new();

        for pass in Pass::ALL {
            let (pass_groups, stats) = self.run_pass(pass, survivors)?;
            log::info!(
                "{} pass: {} files in, {} groups, {} survivors ({:.1}% eliminated)",
                pass,
                stats.input_files,
                stats.duplicate_groups,
                stats.surviving_files,
                stats.elimination_rate()
            );
            all_stats.push(stats);

            // Flatten group members into the next pass's input; the last
            // pass's groups are the pipeline's output.
            survivors = if pass == Pass::Confirm {
                Vec::new()
            } else {
                pass_groups.iter().flat_map(|g| g.files.iter().cloned()).collect()
            };
            groups = pass_groups;
        }

        Ok((groups, all_stats))
    }

    /// Hash every file at this pass's scan depth and group by digest.
    fn run_pass(
        &self,
        pass: Pass,
        files: Vec<FileEntry>,
    ) -> Result<(Vec<DuplicateGroup>, PassStats), PipelineError> {
        let start = Instant::now();
        let scan_size = self.scan_size(pass);
        let algorithm = pass.algorithm();
        let mut stats = PassStats::new(pass, files.len());

        log::debug!(
            "{} pass: hashing {} files with {} (scan size {})",
            pass,
            files.len(),
            algorithm,
            scan_size
        );

        if let Some(ref callback) = self.config.progress {
            callback.on_pass_start(pass.name(), files.len());
        }

        let mut pairs = Vec::with_capacity(files.len());
        for (idx, file) in files.into_iter().enumerate() {
            if let Some(ref callback) = self.config.progress {
                callback.on_progress(idx + 1, file.path.to_string_lossy().as_ref());
            }

            match hash_file(&file.path, scan_size, algorithm) {
                Ok(digest) => {
                    stats.hashed_files += 1;
                    pairs.push((digest, file));
                }
                Err(e) => {
                    if self.config.strict {
                        return Err(PipelineError::Read {
                            pass: pass.name(),
                            source: e,
                        });
                    }
                    log::warn!("{} pass: skipping {}: {}", pass, file.path.display(), e);
                    stats.failed_files += 1;
                    stats.errors.push(e);
                }
            }
        }

        let groups = group_by_digest(pairs);
        stats.duplicate_groups = groups.len();
        stats.surviving_files = groups.iter().map(DuplicateGroup::len).sum();
        stats.duration = start.elapsed();

        if let Some(ref callback) = self.config.progress {
            callback.on_pass_end(pass.name());
        }

        Ok((groups, stats))
    }
}
