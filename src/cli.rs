//! Command-line interface definitions for dupescan.
//!
//! All CLI arguments are defined with the clap derive API. There is a
//! single operation (scan a tree for duplicates), so the interface is
//! flat: a positional root path plus options.
//!
//! # Example
//!
//! ```bash
//! # Scan the current directory with text output (default)
//! dupescan
//!
//! # Scan a directory, skipping build trees, with JSON output
//! dupescan ~/projects --exclude target --exclude node_modules --format json
//!
//! # Tiny screen pass for highly similar file sets
//! dupescan /data --scan-size 512 --multiplier 32
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Incremental multi-pass duplicate file finder.
///
/// dupescan finds byte-identical files by screening candidates with cheap
/// prefix hashes (BLAKE3) before confirming with a full-content SHA-256,
/// so files distinguishable by their first few bytes never incur a full
/// read.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for duplicates
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Exclude directories whose path contains this substring
    /// (can be specified multiple times)
    #[arg(short, long = "exclude", value_name = "SUBSTRING")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "txt")]
    pub format: OutputFormat,

    /// Abort on the first unreadable file instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Bytes hashed per file in the first pass (e.g. 4096, 4KiB, 1MB)
    #[arg(long, value_name = "SIZE", value_parser = parse_size, default_value = "4KiB")]
    pub scan_size: u64,

    /// Second-pass scan size as a multiple of the first
    #[arg(long, value_name = "N", default_value = "100")]
    pub multiplier: u64,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors and results
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with framed duplicate groups
    Txt,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Txt => write!(f, "txt"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Parse a human-readable size string into bytes.
///
/// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB. Case-insensitive;
/// numbers without a suffix are treated as bytes.
///
/// # Errors
///
/// Returns an error if the string is empty, contains an invalid number,
/// a negative number, or an unknown size suffix.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Size cannot be empty".to_string());
    }

    // Find where the number ends and the suffix begins
    let (num_str, suffix) = match s.find(|c: char| !c.is_ascii_digit() && c != '.') {
        Some(idx) => (&s[..idx], s[idx..].trim().to_uppercase()),
        None => (s, String::new()),
    };

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid number: '{num_str}'"))?;

    if num < 0.0 {
        return Err("Size cannot be negative".to_string());
    }

    let multiplier: u64 = match suffix.as_str() {
        "" | "B" => 1,
        "KB" | "K" => 1_000,
        "KIB" => 1_024,
        "MB" | "M" => 1_000_000,
        "MIB" => 1_048_576,
        "GB" | "G" => 1_000_000_000,
        "GIB" => 1_073_741_824,
        _ => return Err(format!("Unknown size suffix: '{suffix}'")),
    };

    Ok((num * multiplier as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_bytes() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("1024B").unwrap(), 1024);
        assert_eq!(parse_size("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_size_suffixes() {
        assert_eq!(parse_size("1KB").unwrap(), 1_000);
        assert_eq!(parse_size("1KiB").unwrap(), 1_024);
        assert_eq!(parse_size("1kib").unwrap(), 1_024); // Case insensitive
        assert_eq!(parse_size("1MiB").unwrap(), 1_048_576);
        assert_eq!(parse_size("1GB").unwrap(), 1_000_000_000);
    }

    #[test]
    fn test_parse_size_fractional() {
        assert_eq!(parse_size("1.5MB").unwrap(), 1_500_000);
        assert_eq!(parse_size("0.5KiB").unwrap(), 512);
    }

    #[test]
    fn test_parse_size_with_whitespace() {
        assert_eq!(parse_size("  1024  ").unwrap(), 1024);
        assert_eq!(parse_size("1 MB").unwrap(), 1_000_000);
    }

    #[test]
    fn test_parse_size_errors() {
        assert!(parse_size("").is_err());
        assert!(parse_size("abc").is_err());
        assert!(parse_size("1XB").is_err());
        assert!(parse_size("-1MB").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["dupescan"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(cli.exclude.is_empty());
        assert_eq!(cli.format, OutputFormat::Txt);
        assert!(!cli.strict);
        assert_eq!(cli.scan_size, 4096);
        assert_eq!(cli.multiplier, 100);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "dupescan",
            "/data",
            "--exclude",
            ".git",
            "--exclude",
            "target",
            "--format",
            "json",
            "--scan-size",
            "1KiB",
            "--multiplier",
            "10",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.path, PathBuf::from("/data"));
        assert_eq!(cli.exclude, vec![".git", "target"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.scan_size, 1024);
        assert_eq!(cli.multiplier, 10);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["dupescan", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_strict_flag() {
        let cli = Cli::try_parse_from(["dupescan", "--strict"]).unwrap();
        assert!(cli.strict);
    }

    #[test]
    fn test_cli_invalid_format() {
        let result = Cli::try_parse_from(["dupescan", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_invalid_scan_size() {
        let result = Cli::try_parse_from(["dupescan", "--scan-size", "huge"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Txt.to_string(), "txt");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
