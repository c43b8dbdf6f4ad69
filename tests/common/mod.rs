#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the loc-badge binary.
#[macro_export]
macro_rules! loc_badge {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("loc-badge"))
    };
}

/// A representative counts document with totals and several languages.
pub const SAMPLE_COUNTS: &str = r#"{
    "Total": {"code": 1250, "lines": 1600, "files": 24},
    "Python": {"code": 600, "files": 10},
    "TypeScript": {"code": 300, "files": 6},
    "TSX": {"code": 150, "files": 4},
    "Shell": {"code": 120, "files": 3},
    "Makefile": {"code": 80, "files": 1}
}"#;

/// Temporary working directory with helpers for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a counts document at the default input path.
    pub fn write_counts(&self, json: &str) {
        self.write_file("loc-data.json", json);
    }

    /// Writes a file with the given content in the temp directory.
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Path of the card at the default output location.
    pub fn card_path(&self) -> PathBuf {
        self.dir.path().join("loc-stats.svg")
    }

    /// Reads the rendered card at the default output location.
    pub fn read_card(&self) -> String {
        fs::read_to_string(self.card_path()).expect("Failed to read rendered card")
    }

    /// Whether a card exists at the default output location.
    pub fn card_exists(&self) -> bool {
        self.card_path().exists()
    }
}
