//! Shared testing harness for `stowage` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const TEST_TOKEN: &str = "test-token";

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path of the default manifest.
    pub(crate) fn manifest_path(&self) -> PathBuf {
        self.work_dir().join("stowage.toml")
    }

    /// Write the default manifest.
    pub(crate) fn write_manifest(&self, content: &str) {
        fs::write(self.manifest_path(), content).expect("Failed to write manifest");
    }

    /// Write a manifest whose `[api]` section points at `api_url`.
    pub(crate) fn write_manifest_for(&self, api_url: &str, setup: &str) {
        self.write_manifest(&format!("[api]\nurl = \"{}\"\ntimeout_secs = 5\n\n{}", api_url, setup));
    }

    /// Build a command for invoking the compiled `stowage` binary with a token set.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stowage").expect("Failed to locate stowage binary");
        cmd.current_dir(self.work_dir())
            .env("STOWAGE_API_TOKEN", TEST_TOKEN)
            .env_remove("RUST_LOG");
        cmd
    }

    /// `stowage setup` for the given service, with extra flags.
    pub(crate) fn setup(&self, service_id: &str, version: u32, flags: &[&str]) -> Command {
        let mut cmd = self.cli();
        cmd.args(["setup", "--service-id", service_id, "--service-version"])
            .arg(version.to_string())
            .args(flags);
        cmd
    }
}
