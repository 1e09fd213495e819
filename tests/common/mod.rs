#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the judge-checker binary.
#[macro_export]
macro_rules! judge_checker {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("judge-checker"))
    };
}

/// Exit status the process reports for a precondition error (`-1`).
#[cfg(unix)]
pub const EXIT_INPUT_ERROR_STATUS: i32 = 255;
#[cfg(windows)]
pub const EXIT_INPUT_ERROR_STATUS: i32 = -1;

pub const INPUT_NAME: &str = "tc.in";
pub const REFERENCE_NAME: &str = "tc.out";
pub const CANDIDATE_NAME: &str = "user.out";

/// One judged test case: input, reference and candidate in a temp directory.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture with the three checker files.
    pub fn new(reference: &str, candidate: &str) -> Self {
        Self::with_bytes(reference.as_bytes(), candidate.as_bytes())
    }

    pub fn with_bytes(reference: &[u8], candidate: &[u8]) -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_file(INPUT_NAME, b"3\n1 2 3\n");
        fixture.create_file(REFERENCE_NAME, reference);
        fixture.create_file(CANDIDATE_NAME, candidate);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.dir.path().join(relative_path)).expect("Failed to remove file");
    }

    /// Creates a checker config file in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".judge-checker.toml", content.as_bytes());
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// The three positional arguments, in calling-convention order.
    pub fn args(&self) -> [PathBuf; 3] {
        [
            self.file(INPUT_NAME),
            self.file(REFERENCE_NAME),
            self.file(CANDIDATE_NAME),
        ]
    }
}
