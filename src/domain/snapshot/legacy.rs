//! Parser for the delimited-text scan format used before JSON snapshots.
//!
//! ```text
//! ## HOMEBREW_FORMULAE ##
//! git
//! wget
//! ## HOMEBREW_CASKS ##
//! None
//! ```
//!
//! Each section runs until the next line starting with `## `. Blank lines and
//! `None` placeholders are dropped. Unknown sections are ignored and missing
//! ones are empty.

use std::collections::BTreeMap;

use super::error::ParseError;
use super::model::{
    Development, GitSettings, Homebrew, Languages, PackageManagers, Snapshot, SnapshotFormat,
    SnapshotMeta, Terminal, VsCode,
};

const UNKNOWN: &str = "unknown";

/// Parse legacy delimited scan text into a [`Snapshot`].
pub fn parse_legacy(raw: &str) -> Result<Snapshot, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(from_sections(split_sections(raw)))
}

/// Snapshot with nothing to restore, used when input cannot be read at all.
pub(crate) fn empty_legacy() -> Snapshot {
    from_sections(BTreeMap::new())
}

fn from_sections(mut sections: BTreeMap<String, Vec<String>>) -> Snapshot {
    let mut take = |name: &str| sections.remove(name).unwrap_or_default();

    let formulae = take("HOMEBREW_FORMULAE");
    let casks = take("HOMEBREW_CASKS");
    let taps = take("HOMEBREW_TAPS");
    let extensions = take("VSCODE_EXTENSIONS");
    let git_lines = take("GIT_CONFIG");

    let homebrew = if formulae.is_empty() && casks.is_empty() && taps.is_empty() {
        None
    } else {
        Some(Homebrew { formulae, casks, taps })
    };

    Snapshot {
        meta: SnapshotMeta {
            version: None,
            timestamp: None,
            hostname: UNKNOWN.to_string(),
            os_version: UNKNOWN.to_string(),
            arch: UNKNOWN.to_string(),
        },
        package_managers: PackageManagers { homebrew },
        applications: Vec::new(),
        development: Development {
            vscode: (!extensions.is_empty())
                .then(|| VsCode { extensions, ..VsCode::default() }),
            git: (!git_lines.is_empty())
                .then(|| GitSettings { global_config: git_lines.join("\n"), gitconfig_file: None }),
        },
        terminal: Terminal::default(),
        languages: Languages::default(),
        cloud: Default::default(),
        format: SnapshotFormat::LegacyText,
    }
}

fn split_sections(raw: &str) -> BTreeMap<String, Vec<String>> {
    let mut sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in raw.lines() {
        if line.starts_with("## ") {
            current = section_name(line).map(str::to_string);
            if let Some(name) = &current {
                sections.entry(name.clone()).or_default();
            }
            continue;
        }

        let Some(name) = &current else { continue };
        let item = line.trim();
        if item.is_empty() || item == "None" {
            continue;
        }
        if let Some(items) = sections.get_mut(name) {
            items.push(item.to_string());
        }
    }

    sections
}

fn section_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix("## ")?.trim_end().strip_suffix("##")?.trim();
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
## HOMEBREW_FORMULAE ##
git
wget

## HOMEBREW_CASKS ##
None
## HOMEBREW_TAPS ##
homebrew/cask-fonts
## SOMETHING_NEW ##
ignored
## VSCODE_EXTENSIONS ##
rust-lang.rust-analyzer
## GIT_CONFIG ##
user.name=Jane Doe
user.email=jane@example.com
";

    #[test]
    fn extracts_known_sections() {
        let snapshot = parse_legacy(SAMPLE).unwrap();
        let brew = snapshot.homebrew().unwrap();

        assert_eq!(brew.formulae, vec!["git", "wget"]);
        assert!(brew.casks.is_empty());
        assert_eq!(brew.taps, vec!["homebrew/cask-fonts"]);
        assert_eq!(snapshot.development.vscode.unwrap().extensions, vec!["rust-lang.rust-analyzer"]);
        assert_eq!(
            snapshot.development.git.unwrap().global_config,
            "user.name=Jane Doe\nuser.email=jane@example.com"
        );
    }

    #[test]
    fn missing_sections_are_empty() {
        let snapshot = parse_legacy("## HOMEBREW_CASKS ##\nslack\n").unwrap();

        assert_eq!(snapshot.cask_count(), 1);
        assert_eq!(snapshot.formula_count(), 0);
        assert!(snapshot.development.git.is_none());
    }

    #[test]
    fn text_without_markers_yields_empty_snapshot() {
        let snapshot = parse_legacy("just some text\n").unwrap();

        assert!(snapshot.homebrew().is_none());
        assert_eq!(snapshot.format, SnapshotFormat::LegacyText);
        assert_eq!(snapshot.meta.hostname, "unknown");
    }

    #[test]
    fn blank_input_is_empty_error() {
        assert_eq!(parse_legacy("\n\n"), Err(ParseError::Empty));
    }

    #[test]
    fn lines_before_first_marker_are_ignored() {
        let snapshot = parse_legacy("preamble\n## HOMEBREW_FORMULAE ##\njq\n").unwrap();
        assert_eq!(snapshot.homebrew().unwrap().formulae, vec!["jq"]);
    }
}
