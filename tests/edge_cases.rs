//! Boundary and odd-path cases for the duplicate finder.

use std::fs::{self, File};
use std::io::Write;

use dupescan::duplicates::{DuplicateFinder, PipelineConfig};
use dupescan::scanner::{WalkerConfig, BLOCK_SIZE};
use tempfile::tempdir;

#[test]
fn test_empty_files_group_together() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("empty1.txt")).unwrap();
    File::create(dir.path().join("empty2.txt")).unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    // Zero-byte files are byte-identical by definition
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].files.len(), 2);
    assert_eq!(summary.reclaimable_space, 0);
}

#[test]
fn test_one_byte_files() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("small1.txt"))
        .unwrap()
        .write_all(b"a")
        .unwrap();
    File::create(dir.path().join("small2.txt"))
        .unwrap()
        .write_all(b"a")
        .unwrap();
    File::create(dir.path().join("small3.txt"))
        .unwrap()
        .write_all(b"b")
        .unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].size(), 1);
    assert_eq!(groups[0].files.len(), 2);
    assert_eq!(summary.total_files, 3);
}

#[test]
fn test_file_at_block_boundary() {
    let dir = tempdir().unwrap();

    let mut content1 = vec![b'x'; BLOCK_SIZE];
    let content2 = content1.clone();

    // Exactly one block, identical
    File::create(dir.path().join("boundary1.bin"))
        .unwrap()
        .write_all(&content1)
        .unwrap();
    File::create(dir.path().join("boundary2.bin"))
        .unwrap()
        .write_all(&content2)
        .unwrap();

    // Exactly one block but different in the very last byte
    content1[BLOCK_SIZE - 1] = b'y';
    File::create(dir.path().join("boundary3.bin"))
        .unwrap()
        .write_all(&content1)
        .unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].size(), BLOCK_SIZE as u64);
    assert_eq!(groups[0].files.len(), 2);
    assert_eq!(summary.total_files, 3);
}

#[test]
fn test_special_characters_in_filenames() {
    let dir = tempdir().unwrap();

    for (name, content) in [
        ("file with spaces.txt", b"content one".as_slice()),
        ("dup of spaces.txt", b"content one"),
        ("caf\u{e9}_\u{1f980}.txt", b"unicode content"),
        ("dup of unicode.txt", b"unicode content"),
    ] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(content)
            .unwrap();
    }

    let finder = DuplicateFinder::with_defaults();
    let (groups, _summary) = finder.find_duplicates(dir.path()).unwrap();
    assert_eq!(groups.len(), 2);
}

#[test]
fn test_deeply_nested_paths() {
    let dir = tempdir().unwrap();
    let mut current = dir.path().to_path_buf();
    for i in 0..15 {
        current = current.join(format!("level_{i}"));
        fs::create_dir(&current).unwrap();
    }

    File::create(current.join("deep.txt"))
        .unwrap()
        .write_all(b"deep content")
        .unwrap();
    File::create(dir.path().join("shallow.txt"))
        .unwrap()
        .write_all(b"deep content")
        .unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(summary.total_files, 2);
}

#[test]
fn test_excluded_duplicates_never_counted() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("cache")).unwrap();
    fs::create_dir(dir.path().join("cache/inner")).unwrap();

    for name in ["a.txt", "cache/b.txt", "cache/inner/c.txt"] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(b"same bytes")
            .unwrap();
    }

    let finder = DuplicateFinder::new(
        WalkerConfig::new(vec!["cache".to_string()]),
        PipelineConfig::default(),
    );
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();
    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 1);
}

#[test]
fn test_many_copies_one_group() {
    let dir = tempdir().unwrap();
    for i in 0..12 {
        File::create(dir.path().join(format!("copy_{i:02}.dat")))
            .unwrap()
            .write_all(b"the same payload in every copy")
            .unwrap();
    }

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].files.len(), 12);
    assert_eq!(summary.duplicate_files, 11);
}
