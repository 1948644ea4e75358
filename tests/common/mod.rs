//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a braid command
pub fn braid() -> Command {
    Command::new(cargo::cargo_bin!("braid"))
}

/// Helper to create a test project in a temp directory
pub fn setup_test_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    braid()
        .current_dir(tmp.path())
        .args(["init", "--name", "Test Project"])
        .assert()
        .success();
    tmp
}

/// Helper to create a test item, returning its (possibly truncated) ID
pub fn create_test_item(tmp: &TempDir, title: &str, extra: &[&str]) -> String {
    let mut args = vec!["item", "new", "--title", title, "--no-edit"];
    args.extend_from_slice(extra);

    let output = braid()
        .current_dir(tmp.path())
        .args(&args)
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Prefer the full ID from the printed file path (ITEM-<ulid>.braid.yaml),
    // which is unique even when two items created in the same millisecond share
    // a truncated short-ID prefix. Fall back to the truncated short ID.
    stdout
        .split(|c: char| c.is_whitespace())
        .filter_map(|w| w.rsplit('/').next())
        .find_map(|name| {
            name.strip_prefix("ITEM-")
                .and_then(|rest| rest.strip_suffix(".braid.yaml"))
                .map(|ulid| format!("ITEM-{}", ulid))
        })
        .or_else(|| {
            stdout
                .lines()
                .find(|l| l.contains("ITEM-"))
                .and_then(|l| l.split_whitespace().find(|w| w.starts_with("ITEM-")))
                .map(|s| s.trim_end_matches("...").to_string())
        })
        .unwrap_or_default()
}

/// Read the stored YAML for the item whose file name starts with the ID fragment
pub fn read_item_file(tmp: &TempDir, id_fragment: &str) -> String {
    let project = braid::core::Project::discover_from(tmp.path()).unwrap();
    let path = project
        .iter_item_files()
        .into_iter()
        .find(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().starts_with(id_fragment))
                .unwrap_or(false)
        })
        .unwrap_or_else(|| panic!("no item file matching {}", id_fragment));
    std::fs::read_to_string(path).unwrap()
}

/// A date offset from today, formatted YYYY-MM-DD
pub fn day(offset: i64) -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(offset))
        .format("%Y-%m-%d")
        .to_string()
}
