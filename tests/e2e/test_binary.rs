//! Integration tests for the mermaid-drawio binary.
//!
//! These tests run the compiled binary against temporary directories and
//! check the written document, the exit status and the messages.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the binary cargo built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mermaid-drawio"))
}

fn run_binary(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to run binary")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

// ─── Success paths ──────────────────────────────────────────────────────────

#[test]
fn test_input_string_to_file() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("out.drawio");

    let output = run_binary(&[
        "--input-string",
        "graph TD\nA[Start] --> B{Ok?}\n",
        "--output-file",
        path_str(&out_file),
    ]);

    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Successfully converted"));
    assert!(stdout.contains(path_str(&out_file)));

    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.starts_with("<mxfile"));
    assert!(content.contains(r#"value="Start""#));
    assert!(content.contains(r#"value="Ok?" style="shape=rhombus;"#));
}

#[test]
fn test_reads_from_file() {
    let dir = TempDir::new().unwrap();
    let input_file = dir.path().join("input.mm.md");
    let out_file = dir.path().join("out.drawio");
    fs::write(&input_file, "graph LR\n    X --> Y\n").unwrap();

    let output = run_binary(&["-i", path_str(&input_file), "-o", path_str(&out_file)]);

    assert!(output.status.success());
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.contains(r#"value="X""#), "Output file should contain X");
    assert!(content.contains(r#"value="Y""#), "Output file should contain Y");
}

#[test]
fn test_pretty_flag() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("out.drawio");

    let output = run_binary(&["-s", "A --> B", "-o", path_str(&out_file), "--pretty"]);

    assert!(output.status.success());
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.lines().count() > 1, "pretty output should span lines");
}

#[test]
fn test_version_flag() {
    let output = run_binary(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("mermaid-drawio "));
}

// ─── Failure paths ──────────────────────────────────────────────────────────

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.mm.md");
    let out_file = dir.path().join("out.drawio");

    let output = run_binary(&["-i", path_str(&missing), "-o", path_str(&out_file)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input file not found"), "stderr: {stderr}");
    assert!(!out_file.exists());
}

#[test]
fn test_empty_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("out.drawio");

    let output = run_binary(&["-s", "   \n  ", "-o", path_str(&out_file)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Mermaid input is empty"), "stderr: {stderr}");
    assert!(!out_file.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("missing-dir").join("out.drawio");

    let output = run_binary(&["-s", "A --> B", "-o", path_str(&out_file)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot write output file"), "stderr: {stderr}");
}

#[test]
fn test_input_sources_are_mutually_exclusive() {
    let dir = TempDir::new().unwrap();
    let input_file = dir.path().join("input.mm.md");
    let out_file = dir.path().join("out.drawio");
    fs::write(&input_file, "A --> B\n").unwrap();

    let output = run_binary(&[
        "-i",
        path_str(&input_file),
        "-s",
        "A --> B",
        "-o",
        path_str(&out_file),
    ]);

    assert!(!output.status.success());
    assert!(!out_file.exists());
}

#[test]
fn test_input_source_is_required() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("out.drawio");

    let output = run_binary(&["-o", path_str(&out_file)]);

    assert!(!output.status.success());
}

#[test]
fn test_output_file_is_required() {
    let output = run_binary(&["-s", "A --> B"]);
    assert!(!output.status.success());
}
