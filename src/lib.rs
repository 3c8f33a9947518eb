//! dupescan - Incremental Multi-Pass Duplicate File Finder
//!
//! Finds groups of byte-identical files under a directory tree without
//! fully hashing every file: cheap prefix hashes (BLAKE3) progressively
//! narrow the candidate set before a full-content SHA-256 confirms true
//! equality.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use crate::cli::{Cli, OutputFormat};
use crate::config::ScanConfig;
use crate::duplicates::{DuplicateFinder, PipelineConfig};
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};
use crate::progress::Progress;
use crate::scanner::WalkerConfig;

/// Run a scan from parsed CLI arguments and print the results.
///
/// Returns the exit code the process should report.
///
/// # Errors
///
/// Returns an error for invalid configuration, a strict-mode read
/// failure, or an output failure.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = ScanConfig {
        root: cli.path.clone(),
        exclude: cli.exclude.clone(),
        format: cli.format,
        strict: cli.strict,
        screen_size: cli.scan_size,
        refine_multiplier: cli.multiplier,
    };
    config.validate()?;

    let mut pipeline_config = PipelineConfig::default()
        .with_screen_size(config.screen_size)
        .with_refine_multiplier(config.refine_multiplier)
        .with_strict(config.strict);
    if !cli.quiet {
        pipeline_config = pipeline_config.with_progress(Arc::new(Progress::new(false)));
    }

    let finder = DuplicateFinder::new(WalkerConfig::new(config.exclude.clone()), pipeline_config);
    let (groups, summary) = finder.find_duplicates(&config.root)?;

    let exit_code = if summary.failed_files > 0 || summary.walk_errors > 0 {
        ExitCode::PartialSuccess
    } else if groups.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    };

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    match config.format {
        OutputFormat::Txt => {
            TextOutput::new(&groups, &summary)
                .write_to(&mut writer)
                .context("Failed to write text output")?;
        }
        OutputFormat::Json => {
            JsonOutput::new(&groups, &summary, exit_code)
                .write_to(&mut writer)
                .context("Failed to write JSON output")?;
        }
    }
    writer.flush()?;

    Ok(exit_code)
}
