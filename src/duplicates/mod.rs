//! Duplicate detection: digest grouping and the three-pass pipeline.

pub mod finder;
pub mod grouper;
pub mod pipeline;

pub use finder::{DuplicateFinder, FinderError, ScanSummary};
pub use grouper::{group_by_digest, DuplicateGroup};
pub use pipeline::{Pass, PassPipeline, PassStats, PipelineConfig, PipelineError};
