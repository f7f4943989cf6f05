//! # Pawsbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! built here runs inside its own temporary directory with `HOME` and
//! `XDG_CONFIG_HOME` pointed into it, so a developer's real pawsbot config
//! never leaks into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated working directory for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        // Stops the project config search from walking above the sandbox.
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `name` inside the sandbox and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    /// Creates `name` (and any parents) inside the sandbox.
    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create sandbox subdirectory");
        path
    }

    /// A `pawsbot` command running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = pawsbot_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("PAWSBOT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// # Get Pawsbot Command (`pawsbot_cmd`)
///
/// An `assert_cmd::Command` pointing at the compiled `pawsbot` binary.
///
/// ## Panics
/// Panics if the `pawsbot` binary cannot be found via `Command::cargo_bin`.
pub fn pawsbot_cmd() -> Command {
    Command::cargo_bin("pawsbot").expect("Failed to find pawsbot binary for testing")
}

/// A small custom rule table used across tests.
pub const CUSTOM_RULES: &str = r#"
fallback = ["Woof? Try again."]

[[rules]]
name = "treats"
category = "promotional"
triggers = ["treat", "snack"]
response = "Treats are 2-for-1 this week!"

[[rules]]
name = "walks"
category = "informational"
triggers = ["walk"]
response = "Our reflective leashes are perfect for evening walks."
"#;
