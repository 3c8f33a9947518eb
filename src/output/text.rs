//! Human-readable text output with framed duplicate groups.
//!
//! Each group is printed as a visual frame: the first path carries a `┏`
//! marker, middle paths `┃`, and the last path `┗`. A summary footer
//! reports group counts and reclaimable space.
//!
//! ```text
//! ┏ /photos/2019/img_0141.jpg
//! ┃ /backup/img_0141.jpg
//! ┗ /photos/dupes/img_0141 (copy).jpg
//!
//! 1 duplicate group, 2 redundant files, 3.4 MB reclaimable
//! ```

use std::io::Write;

use bytesize::ByteSize;
use yansi::Paint;

use crate::duplicates::{DuplicateGroup, ScanSummary};

/// Group frame markers, in first/middle/last order.
const MARKER_FIRST: &str = "┏";
const MARKER_MIDDLE: &str = "┃";
const MARKER_LAST: &str = "┗";

/// Text presenter for duplicate groups.
#[derive(Debug)]
pub struct TextOutput<'a> {
    groups: &'a [DuplicateGroup],
    summary: &'a ScanSummary,
}

impl<'a> TextOutput<'a> {
    /// Create a text presenter over groups and their summary.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup], summary: &'a ScanSummary) -> Self {
        Self { groups, summary }
    }

    /// Write the framed groups and summary footer.
    ///
    /// Coloring follows the global yansi state; callers disable it for
    /// `--no-color` or non-terminal output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for group in self.groups {
            // Groups are built with two or more members, but the fields
            // are public; render a hand-built empty group as nothing
            // rather than underflowing.
            let last = group.files.len().saturating_sub(1);
            for (idx, file) in group.files.iter().enumerate() {
                let marker = match idx {
                    0 => MARKER_FIRST,
                    i if i == last => MARKER_LAST,
                    _ => MARKER_MIDDLE,
                };
                writeln!(writer, "{} {}", marker.cyan(), file.path.display())?;
            }
        }

        if !self.groups.is_empty() {
            writeln!(writer)?;
        }
        writeln!(
            writer,
            "{} duplicate {}, {} redundant {}, {} reclaimable",
            self.summary.duplicate_groups,
            plural(self.summary.duplicate_groups, "group", "groups"),
            self.summary.duplicate_files,
            plural(self.summary.duplicate_files, "file", "files"),
            ByteSize::b(self.summary.reclaimable_space)
        )?;

        Ok(())
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
