//! Digest-based candidate grouping.
//!
//! # Overview
//!
//! [`group_by_digest`] turns a stream of (digest, file) pairs into
//! duplicate groups. The first file seen with a digest is held as a lone
//! candidate; the second promotes both into a group; later arrivals with
//! the same digest append to it. Files whose digest never collides are
//! silently dropped, which is how non-duplicates fall out between passes.
//!
//! Group member order is strictly first-seen order, and groups appear in
//! the order their digest first collided.
//!
//! # Example
//!
//! ```
//! use dupescan::duplicates::group_by_digest;
//! use dupescan::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let d1 = [1u8; 32];
//! let d2 = [2u8; 32];
//! let pairs = vec![
//!     (d1, FileEntry::new(PathBuf::from("/a"), 10)),
//!     (d2, FileEntry::new(PathBuf::from("/b"), 10)),
//!     (d1, FileEntry::new(PathBuf::from("/c"), 10)),
//! ];
//!
//! let groups = group_by_digest(pairs);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].files.len(), 2); // /a then /c; /b was a singleton
//! ```

use std::collections::HashMap;

use crate::scanner::{digest_to_hex, Digest, FileEntry};

/// Files sharing one digest at the scan depth of the pass that produced
/// them.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    /// The shared digest
    pub digest: Digest,
    /// Member files in first-seen order; always two or more
    pub files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// The digest as a lowercase hex string.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        digest_to_hex(&self.digest)
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty. Groups produced by
    /// [`group_by_digest`] never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Size of one member file.
    ///
    /// Only meaningful for full-content groups, where all members have
    /// identical bytes and therefore identical sizes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.files.first().map_or(0, |f| f.size)
    }

    /// Space reclaimable by keeping a single copy.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size() * self.files.len().saturating_sub(1) as u64
    }
}

/// Group files by digest, keeping only digests seen more than once.
///
/// Consumes (digest, file) pairs in arrival order. Singletons are
/// dropped; an empty input or an input where every digest is distinct
/// yields an empty Vec.
///
/// # Arguments
///
/// * `pairs` - (digest, file) pairs, typically one pass's hash results
#[must_use]
pub fn group_by_digest<I>(pairs: I) -> Vec<DuplicateGroup>
where
    I: IntoIterator<Item = (Digest, FileEntry)>,
{
    // Lone candidates: digest -> the only file seen with it so far
    let mut candidates: HashMap<Digest, FileEntry> = HashMap::new();
    // Promoted groups, in promotion order, with an index by digest
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut group_index: HashMap<Digest, usize> = HashMap::new();

    for (digest, file) in pairs {
        if let Some(&idx) = group_index.get(&digest) {
            groups[idx].files.push(file);
        } else if let Some(candidate) = candidates.remove(&digest) {
            group_index.insert(digest, groups.len());
            groups.push(DuplicateGroup {
                digest,
                files: vec![candidate, file],
            });
        } else {
            candidates.insert(digest, file);
        }
    }

    groups
}
