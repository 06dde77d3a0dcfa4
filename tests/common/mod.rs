//! Shared testing utilities for baseline CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `baseline` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("baseline").expect("Failed to locate baseline binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home()).env_remove("BASELINE_LOG");
        cmd
    }

    /// Write a file relative to the work directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.work_dir.join(name).exists()
    }
}

/// Snapshot JSON as produced by the scan script.
#[allow(dead_code)]
pub fn sample_snapshot() -> &'static str {
    r#"{
  "meta": {
    "version": "2.0.0",
    "timestamp": "2026-10-01T09:00:00Z",
    "hostname": "studio",
    "os_version": "14.5",
    "arch": "arm64"
  },
  "package_managers": {
    "homebrew": {
      "formulae": ["git", "jq"],
      "casks": ["iterm2"],
      "taps": ["hashicorp/tap"]
    }
  },
  "applications": ["iTerm"],
  "development": {
    "vscode": { "extensions": ["rust-lang.rust-analyzer"] },
    "git": { "global_config": "user.name=Sam Lee\ninit.defaultbranch=main" }
  },
  "terminal": {
    "shell_configs": { ".zshrc": "export EDITOR=vim" },
    "ssh": { "config": "Host *\n  AddKeysToAgent yes", "keys_found": ["id_ed25519", "id_ed25519.pub"] }
  },
  "languages": {
    "node": { "global_packages": ["npm@10.2.4", "typescript@5.4.2"] },
    "python": { "pip_packages": ["pip==24.0", "httpie==3.2.2"] }
  }
}"#
}
