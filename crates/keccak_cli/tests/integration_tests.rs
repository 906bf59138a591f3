//! Integration tests for the keccak256 CLI.
//!
//! These tests exercise full workflows: hashing files and stdin, JSON
//! output, and argument validation, against known Keccak-256 digests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Keccak-256 of the empty input (Ethereum canonical).
const EMPTY_DIGEST: &str = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

/// Keccak-256 of "abc".
const ABC_DIGEST: &str = "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45";

/// Get the path to the built binary.
fn cli() -> Command {
    Command::cargo_bin("keccak256").unwrap()
}

/// Create a test file with content.
fn create_test_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keccak-256 checksums"));
}

#[test]
fn test_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keccak256"));
}

// ============================================================================
// File Hashing Tests
// ============================================================================

#[test]
fn test_hash_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "empty.bin", b"");

    cli()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(EMPTY_DIGEST));
}

#[test]
fn test_hash_abc_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "abc.txt", b"abc");

    cli()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(ABC_DIGEST));
}

#[test]
fn test_hash_multiple_files() {
    let dir = TempDir::new().unwrap();
    let empty = create_test_file(&dir, "empty.bin", b"");
    let abc = create_test_file(&dir, "abc.txt", b"abc");

    cli()
        .arg(&empty)
        .arg(&abc)
        .assert()
        .success()
        .stdout(predicate::str::contains(EMPTY_DIGEST))
        .stdout(predicate::str::contains(ABC_DIGEST));
}

#[test]
fn test_sum_style_output_names_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "abc.txt", b"abc");

    cli()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("abc.txt"));
}

#[test]
fn test_large_file_streams() {
    // Larger than the default read buffer, so several update calls run.
    let dir = TempDir::new().unwrap();
    let data = vec![0xA3u8; 300_000];
    let path = create_test_file(&dir, "big.bin", &data);

    let expected = hex::encode(keccak_core::keccak::keccak256(&data));

    cli()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

// ============================================================================
// Stdin Tests
// ============================================================================

#[test]
fn test_hash_stdin() {
    cli()
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains(ABC_DIGEST))
        .stdout(predicate::str::contains("-"));
}

#[test]
fn test_hash_empty_stdin() {
    cli()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(EMPTY_DIGEST));
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "abc.txt", b"abc");

    cli()
        .arg("--json")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"digest\""))
        .stdout(predicate::str::contains(ABC_DIGEST))
        .stdout(predicate::str::contains("\"bytes\": 3"));
}

#[test]
fn test_json_error_output() {
    cli()
        .arg("--json")
        .arg("/nonexistent/path/to/file")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_missing_file_fails() {
    cli()
        .arg("/nonexistent/path/to/file")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_invalid_chunk_size_fails() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "abc.txt", b"abc");

    cli()
        .arg("--chunk-size")
        .arg("100")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid chunk size"));
}

#[test]
fn test_custom_chunk_size_same_digest() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "abc.txt", b"abc");

    cli()
        .arg("--chunk-size")
        .arg("1024")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(ABC_DIGEST));
}
