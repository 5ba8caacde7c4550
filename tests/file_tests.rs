use flate2::write::GzEncoder;
use flate2::Compression;
use markquill::file::loader::load_buffer;
use std::fs;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_load_plain_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "first\nsecond\nthird\n").unwrap();

    let buffer = load_buffer(&path).unwrap();
    assert_eq!(buffer.name(), "notes.txt");
    assert_eq!(buffer.path(), Some(path.as_path()));
    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line(2), Some("second"));
}

#[test]
fn test_load_empty_file_has_one_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let buffer = load_buffer(&path).unwrap();
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(1), Some(""));
}

#[test]
fn test_load_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"one\ntwo\n").unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    let buffer = load_buffer(&path).unwrap();
    assert_eq!(buffer.name(), "log.txt.gz");
    assert_eq!(buffer.lines(), ["one", "two"]);
}

#[test]
fn test_load_corrupt_gzip_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.gz");
    fs::write(&path, b"not gzip at all").unwrap();

    assert!(load_buffer(&path).is_err());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = load_buffer(dir.path().join("missing.txt")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
