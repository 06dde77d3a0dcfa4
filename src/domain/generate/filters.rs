//! Cleanup of raw snapshot fields before they become install steps.
//!
//! Anything that does not look like a package name, a git setting or a
//! dotfile name is dropped silently.

use crate::domain::identifiers::validate_home_file_name;
use crate::domain::script::HomePath;

/// Package name from an `npm ls -g` entry such as `typescript@5.4.2`.
///
/// The version is cut at the last `@`, so scoped packages keep their
/// `@scope/` prefix.
pub fn npm_package_name(entry: &str) -> Option<&str> {
    let entry = entry.trim();
    let name = match entry.rfind('@') {
        Some(0) | None => entry,
        Some(index) => &entry[..index],
    };
    is_npm_name(name).then_some(name)
}

fn is_npm_name(name: &str) -> bool {
    let bare = match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, package)) if !scope.is_empty() => {
                if !is_plain_name(scope) {
                    return false;
                }
                package
            }
            _ => return false,
        },
        None => name,
    };
    is_plain_name(bare)
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Global npm packages to reinstall, in order, without duplicates.
pub fn npm_packages(entries: &[String], exclude: &[String]) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();
    for name in entries.iter().filter_map(|entry| npm_package_name(entry)) {
        if exclude.iter().any(|ex| ex == name) || packages.iter().any(|p| p == name) {
            continue;
        }
        packages.push(name.to_string());
    }
    packages
}

/// Distribution name from a `pip freeze` line.
///
/// Handles `name==1.0`, `name @ file:///...` and bare names. Editable
/// installs, options and comments yield `None`.
pub fn pip_requirement_name(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        return None;
    }
    let line = line.split_once(" @ ").map_or(line, |(name, _)| name);
    let end = line
        .find(|c: char| matches!(c, '=' | '<' | '>' | '!' | '~' | ';' | '[' | ' '))
        .unwrap_or(line.len());
    let name = line[..end].trim();
    is_plain_name(name).then_some(name)
}

/// Pip packages to reinstall, in order, without duplicates.
///
/// Names are compared after case and separator folding, so `Wheel` matches
/// an exclusion of `wheel`.
pub fn pip_packages(lines: &[String], exclude: &[String]) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();
    for name in lines.iter().filter_map(|line| pip_requirement_name(line)) {
        let normalized = normalize_pip_name(name);
        if exclude.iter().any(|ex| normalize_pip_name(ex) == normalized)
            || packages.iter().any(|p| normalize_pip_name(p) == normalized)
        {
            continue;
        }
        packages.push(name.to_string());
    }
    packages
}

fn normalize_pip_name(name: &str) -> String {
    name.to_ascii_lowercase().replace(['_', '.'], "-")
}

/// `key=value` pairs from `git config --list` output.
///
/// Each line is split at its first `=`; lines without one, or with an empty
/// side, are skipped.
pub fn git_config_pairs(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim_end_matches('\r');
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            let valid_key = !key.is_empty()
                && key.contains('.')
                && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
            (valid_key && !value.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Home-relative path for a dotfile basename from a snapshot.
///
/// A missing leading dot is added; names with separators, `..` or NUL are
/// rejected.
pub fn dotfile_path(name: &str) -> Option<HomePath> {
    let name = name.trim();
    let dotted = if name.starts_with('.') { name.to_string() } else { format!(".{name}") };
    if dotted == "." || dotted.contains("..") || !validate_home_file_name(&dotted) {
        return None;
    }
    HomePath::new(&dotted).ok()
}
