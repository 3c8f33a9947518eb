//! Prefix and full-file hashing.
//!
//! # Overview
//!
//! [`hash_file`] computes a digest over the first `scan_size` bytes of a
//! file, or over its entire content when `scan_size` is zero. Prefix reads
//! are bounded by `scan_size`; full reads are streamed in
//! [`BLOCK_SIZE`]-byte chunks so memory use stays constant regardless of
//! file size.
//!
//! Two algorithms are supported: BLAKE3 for the cheap screening passes and
//! SHA-256 for the confirming full-content pass. Both produce 32-byte
//! digests, and digests from different passes are never compared against
//! each other.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::{hash_file, HashAlgorithm};
//! use std::path::Path;
//!
//! // Hash the first 4 KiB
//! let prefix = hash_file(Path::new("a.txt"), 4096, HashAlgorithm::Blake3).unwrap();
//!
//! // Hash the whole file
//! let full = hash_file(Path::new("a.txt"), 0, HashAlgorithm::Sha256).unwrap();
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::Digest as _;

use super::HashError;

/// One disk block; chunk size for streamed full-file reads.
pub const BLOCK_SIZE: usize = 4096;

/// A 32-byte digest, common to both supported algorithms.
pub type Digest = [u8; 32];

/// Hash algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// Fast non-standardized hash for the screening passes.
    Blake3,
    /// Cryptographically standardized hash for the confirming pass.
    Sha256,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Blake3 => write!(f, "blake3"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
        }
    }
}

/// Incremental hasher state for either algorithm.
enum HasherState {
    Blake3(blake3::Hasher),
    Sha256(sha2::Sha256),
}

impl HasherState {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Blake3 => Self::Blake3(blake3::Hasher::new()),
            HashAlgorithm::Sha256 => Self::Sha256(sha2::Sha256::new()),
        }
    }

    fn update(&mut self, bytes: &[u8]) {
        match self {
            Self::Blake3(h) => {
                h.update(bytes);
            }
            Self::Sha256(h) => h.update(bytes),
        }
    }

    fn finalize(self) -> Digest {
        match self {
            Self::Blake3(h) => *h.finalize().as_bytes(),
            Self::Sha256(h) => h.finalize().into(),
        }
    }
}

/// Hash the leading `scan_size` bytes of a file, or the whole file when
/// `scan_size` is zero.
///
/// A file shorter than `scan_size` is hashed over its full content; this
/// is intentional and is how small identical files still match in the
/// prefix passes.
///
/// The file is opened read-only and closed on every exit path, including
/// read errors.
///
/// # Arguments
///
/// * `path` - File to hash
/// * `scan_size` - Number of leading bytes to hash; zero for the whole file
/// * `algorithm` - Which hash algorithm to use
///
/// # Errors
///
/// Returns a [`HashError`] when the file cannot be opened or read, for
/// example because it was removed between enumeration and hashing or its
/// permissions changed.
pub fn hash_file(path: &Path, scan_size: u64, algorithm: HashAlgorithm) -> Result<Digest, HashError> {
    let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
    let mut state = HasherState::new(algorithm);

    if scan_size > 0 {
        // Prefix read, bounded by scan_size. Short files yield fewer
        // bytes and are hashed over exactly what was read.
        let mut buf = Vec::with_capacity(scan_size.min(1 << 20) as usize);
        file.take(scan_size)
            .read_to_end(&mut buf)
            .map_err(|e| HashError::from_io(path, e))?;
        state.update(&buf);
    } else {
        // Full read, streamed one block at a time.
        let mut reader = file;
        let mut block = [0u8; BLOCK_SIZE];
        loop {
            let n = reader
                .read(&mut block)
                .map_err(|e| HashError::from_io(path, e))?;
            if n == 0 {
                break;
            }
            state.update(&block[..n]);
        }
    }

    Ok(state.finalize())
}

/// Convert a digest to its lowercase hexadecimal representation.
#[must_use]
pub fn digest_to_hex(digest: &Digest) -> String {
    let mut out = String::with_capacity(64);
    for byte in digest {
        use std::fmt::Write;
        // Writing to a String cannot fail
        let _ = write!(out, "{byte:02x}");
    }
    out
}
