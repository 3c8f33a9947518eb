//! JSON output formatter for duplicate scan results.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "digest": "abc123...",
//!       "size": 1024,
//!       "files": ["/path/to/file1.txt", "/path/to/file2.txt"]
//!     }
//!   ],
//!   "summary": {
//!     "total_files": 100,
//!     "total_size": 1048576,
//!     "duplicate_groups": 5,
//!     "duplicate_files": 10,
//!     "reclaimable_space": 51200,
//!     "failed_files": 0,
//!     "scan_duration_ms": 1234,
//!     "exit_code": 0,
//!     "exit_code_name": "DS000"
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, ScanSummary};
use crate::error::ExitCode;

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// Confirm-pass SHA-256 digest as a hex string (64 characters)
    pub digest: String,
    /// Size of one member file in bytes
    pub size: u64,
    /// Member paths in discovery order
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Convert a [`DuplicateGroup`] for serialization.
    #[must_use]
    pub fn from_group(group: &DuplicateGroup) -> Self {
        Self {
            digest: group.digest_hex(),
            size: group.size(),
            files: group
                .files
                .iter()
                .map(|f| f.path.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Total number of files enumerated
    pub total_files: usize,
    /// Total size of all enumerated files in bytes
    pub total_size: u64,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Number of redundant files (beyond the first copy per group)
    pub duplicate_files: usize,
    /// Bytes reclaimable by keeping one copy per group
    pub reclaimable_space: u64,
    /// Files dropped due to read failures
    pub failed_files: usize,
    /// Traversal errors that were skipped
    pub walk_errors: usize,
    /// Total run duration in milliseconds
    pub scan_duration_ms: u64,
    /// Enumeration duration in milliseconds
    pub walk_duration_ms: u64,
    /// Screen pass duration in milliseconds
    pub screen_duration_ms: u64,
    /// Refine pass duration in milliseconds
    pub refine_duration_ms: u64,
    /// Confirm pass duration in milliseconds
    pub confirm_duration_ms: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DS000")
    pub exit_code_name: String,
}

impl JsonSummary {
    /// Convert a [`ScanSummary`] and an exit code for serialization.
    #[must_use]
    pub fn from_scan_summary(summary: &ScanSummary, exit_code: ExitCode) -> Self {
        let pass_ms = |name: &str| {
            summary
                .pass_stats
                .iter()
                .find(|s| s.pass == name)
                .map_or(0, |s| s.duration.as_millis() as u64)
        };

        Self {
            total_files: summary.total_files,
            total_size: summary.total_size,
            duplicate_groups: summary.duplicate_groups,
            duplicate_files: summary.duplicate_files,
            reclaimable_space: summary.reclaimable_space,
            failed_files: summary.failed_files,
            walk_errors: summary.walk_errors,
            scan_duration_ms: summary.scan_duration.as_millis() as u64,
            walk_duration_ms: summary.walk_duration.as_millis() as u64,
            screen_duration_ms: pass_ms("screen"),
            refine_duration_ms: pass_ms("refine"),
            confirm_duration_ms: pass_ms("confirm"),
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output document.
    ///
    /// # Arguments
    ///
    /// * `groups` - Confirmed duplicate groups in discovery order
    /// * `summary` - The scan summary statistics
    /// * `exit_code` - The exit code the process will report
    #[must_use]
    pub fn new(groups: &[DuplicateGroup], summary: &ScanSummary, exit_code: ExitCode) -> Self {
        Self {
            duplicates: groups.iter().map(JsonDuplicateGroup::from_group).collect(),
            summary: JsonSummary::from_scan_summary(summary, exit_code),
        }
    }

    /// Serialize to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to a writer, with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let json = self.to_json_pretty()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::FileEntry;
    use std::path::PathBuf;

    fn sample_group() -> DuplicateGroup {
        DuplicateGroup {
            digest: [0xab; 32],
            files: vec![
                FileEntry::new(PathBuf::from("/a.txt"), 10),
                FileEntry::new(PathBuf::from("/b.txt"), 10),
            ],
        }
    }

    fn sample_summary() -> ScanSummary {
        ScanSummary {
            total_files: 3,
            total_size: 30,
            duplicate_groups: 1,
            duplicate_files: 1,
            reclaimable_space: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_group_conversion() {
        let json_group = JsonDuplicateGroup::from_group(&sample_group());
        assert_eq!(json_group.digest, "ab".repeat(32));
        assert_eq!(json_group.size, 10);
        assert_eq!(json_group.files, vec!["/a.txt", "/b.txt"]);
    }

    #[test]
    fn test_schema_shape() {
        let groups = vec![sample_group()];
        let output = JsonOutput::new(&groups, &sample_summary(), ExitCode::Success);
        let json = output.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["duplicates"].is_array());
        assert_eq!(value["duplicates"][0]["files"].as_array().unwrap().len(), 2);
        assert_eq!(value["summary"]["duplicate_groups"], 1);
        assert_eq!(value["summary"]["exit_code"], 0);
        assert_eq!(value["summary"]["exit_code_name"], "DS000");
    }

    #[test]
    fn test_empty_result() {
        let output = JsonOutput::new(&[], &ScanSummary::default(), ExitCode::NoDuplicates);
        let value: serde_json::Value =
            serde_json::from_str(&output.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["duplicates"].as_array().unwrap().len(), 0);
        assert_eq!(value["summary"]["exit_code"], 2);
    }

    #[test]
    fn test_write_to_ends_with_newline() {
        let output = JsonOutput::new(&[], &ScanSummary::default(), ExitCode::NoDuplicates);
        let mut buf = Vec::new();
        output.write_to(&mut buf).unwrap();
        assert_eq!(buf.last(), Some(&b'\n'));
    }
}
