//! Snapshot domain: scanned machine model, JSON validation, legacy text parser.

mod error;
pub mod legacy;
mod model;
mod validate;

pub use error::ParseError;
pub use legacy::parse_legacy;
pub use model::{
    Development, GitSettings, Homebrew, Languages, NodeRuntime, PackageManagers, PythonRuntime,
    Snapshot, SnapshotFormat, SnapshotMeta, SshSettings, Terminal, VsCode,
};
pub use validate::{load_snapshot, parse_snapshot};

#[cfg(test)]
pub(crate) mod fixtures {
    /// Smallest document that passes structural validation.
    pub(crate) fn minimal_snapshot_json() -> String {
        r#"{
  "meta": { "hostname": "old-mac", "os_version": "14.4", "arch": "arm64" },
  "package_managers": {},
  "applications": [],
  "development": {},
  "terminal": {},
  "languages": {}
}"#
        .to_string()
    }

    /// Snapshot with every optional section populated.
    pub(crate) fn full_snapshot_json() -> String {
        r#"{
  "meta": {
    "version": "2.0.0",
    "timestamp": "2026-10-01T09:00:00Z",
    "hostname": "old-mac",
    "os_version": "14.4",
    "arch": "arm64"
  },
  "package_managers": {
    "homebrew": {
      "formulae": ["git", "node", "ripgrep"],
      "casks": ["visual-studio-code", "slack"],
      "taps": ["homebrew/cask-fonts"]
    }
  },
  "applications": ["Slack", "Visual Studio Code", "Safari"],
  "development": {
    "vscode": { "extensions": ["rust-lang.rust-analyzer", "esbenp.prettier-vscode"] },
    "git": { "global_config": "user.name=Jane Doe\nuser.email=jane@example.com\nbroken line\ncore.editor=code --wait" }
  },
  "terminal": {
    "shell_configs": {
      ".zshrc": "export FOO=bar\nalias gs='git status'",
      ".bash_profile": ""
    },
    "ssh": {
      "config": "Host github.com\n  IdentityFile ~/.ssh/id_ed25519",
      "keys_found": ["id_ed25519", "id_ed25519.pub"]
    }
  },
  "languages": {
    "node": {
      "versions": ["v20.11.0"],
      "global_packages": ["npm@10.2.4", "corepack@0.24.0", "typescript@5.4.2", "@angular/cli@17.3.0"],
      "nvm_installed": true
    },
    "python": {
      "pyenv_versions": ["3.12.2"],
      "pyenv_global": "3.12.2",
      "pip_packages": ["pip==24.0", "wheel==0.43.0", "requests==2.31.0", "black==24.3.0"]
    }
  },
  "cloud": { "aws": true }
}"#
        .to_string()
    }
}
