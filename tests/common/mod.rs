// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Helper function to run ludolog with given arguments and input via stdin
pub fn run_ludolog_with_input(args: &[&str], input: &str) -> (String, String, i32) {
    // Use the built binary directly instead of cargo run to avoid compilation output
    let binary_path = if cfg!(debug_assertions) {
        "./target/debug/ludolog"
    } else {
        "./target/release/ludolog"
    };

    let mut cmd = Command::new(binary_path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start ludolog");

    // Write input to stdin
    if let Some(stdin) = cmd.stdin.as_mut() {
        stdin
            .write_all(input.as_bytes())
            .expect("Failed to write to stdin");
    }

    let output = cmd.wait_with_output().expect("Failed to read output");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Helper function to run ludolog with a temporary file
pub fn run_ludolog_with_file(args: &[&str], file_content: &str) -> (String, String, i32) {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file
        .write_all(file_content.as_bytes())
        .expect("Failed to write to temp file");

    let mut full_args = args.to_vec();
    let path = temp_file.path().to_str().unwrap().to_string();
    full_args.push(&path);

    let binary_path = if cfg!(debug_assertions) {
        "./target/debug/ludolog"
    } else {
        "./target/release/ludolog"
    };

    let cmd = Command::new(binary_path)
        .args(&full_args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute ludolog");

    (
        String::from_utf8_lossy(&cmd.stdout).to_string(),
        String::from_utf8_lossy(&cmd.stderr).to_string(),
        cmd.status.code().unwrap_or(-1),
    )
}

/// Split CSV output into header and data rows, dropping the trailing newline
pub fn split_csv(stdout: &str) -> (String, Vec<String>) {
    let mut lines = stdout.lines().map(|line| line.to_string());
    let header = lines.next().unwrap_or_default();
    (header, lines.collect())
}

/// Extract one named column from a CSV data row, using the header for lookup
pub fn csv_field(header: &str, row: &str, column: &str) -> String {
    let position = header
        .split(',')
        .position(|name| name == column)
        .unwrap_or_else(|| panic!("No column '{}' in header '{}'", column, header));
    row.split(',')
        .nth(position)
        .unwrap_or_else(|| panic!("Row '{}' has no field {}", row, position))
        .to_string()
}
