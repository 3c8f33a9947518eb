//! Scan configuration and up-front validation.
//!
//! Configuration failures are fatal before any pass begins; everything
//! here is checked once, immediately after CLI parsing.

use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::scanner::BLOCK_SIZE;

/// Invalid scan configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The root path does not exist.
    #[error("Root path not found: {0}")]
    RootNotFound(PathBuf),

    /// The root path is not a directory.
    #[error("Root path is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// The screen pass scan size must be positive.
    #[error("Scan size must be greater than zero")]
    ZeroScanSize,

    /// The refine pass multiplier must be positive.
    #[error("Refine multiplier must be greater than zero")]
    ZeroMultiplier,
}

/// Validated inputs for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Directory exclusion substrings
    pub exclude: Vec<String>,
    /// Output format for the result presenter
    pub format: OutputFormat,
    /// Abort on the first read failure
    pub strict: bool,
    /// Screen pass scan size in bytes
    pub screen_size: u64,
    /// Refine pass scan size as a multiple of the screen size
    pub refine_multiplier: u64,
}

impl ScanConfig {
    /// Create a configuration for the given root with defaults for
    /// everything else.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            exclude: Vec::new(),
            format: OutputFormat::Txt,
            strict: false,
            screen_size: BLOCK_SIZE as u64,
            refine_multiplier: crate::duplicates::pipeline::DEFAULT_REFINE_MULTIPLIER,
        }
    }

    /// Check the configuration before the pipeline starts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a nonexistent or non-directory root
    /// and for zero scan sizes or multipliers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::RootNotADirectory(self.root.clone()));
        }
        if self.screen_size == 0 {
            return Err(ConfigError::ZeroScanSize);
        }
        if self.refine_multiplier == 0 {
            return Err(ConfigError::ZeroMultiplier);
        }
        Ok(())
    }
}
