//! Lowering of a scanned [`Snapshot`] into a restore [`Script`].

use tracing::debug;

use super::filters::{dotfile_path, git_config_pairs, npm_packages, pip_packages};
use crate::domain::generator_config::GeneratorConfig;
use crate::domain::identifiers::validate_home_file_name;
use crate::domain::script::{HomePath, Script, Statement, Tone};
use crate::domain::snapshot::{Snapshot, SnapshotFormat};

pub(crate) const TITLE: &str = "Restore from Baseline Snapshot";

pub(crate) fn build(snapshot: &Snapshot, config: &GeneratorConfig) -> Script {
    let mut script = Script::new(TITLE);
    script.banner = banner(snapshot);
    script.push(Statement::BootstrapHomebrew);

    let brew = snapshot.homebrew().cloned().unwrap_or_default();

    let taps = non_blank(&brew.taps);
    emit(&mut script, "Homebrew Taps", taps.iter().map(|tap| Statement::AddTap { tap: tap.clone() }));

    let formulae = non_blank(&brew.formulae);
    emit(
        &mut script,
        "Homebrew Formulae",
        formulae
            .iter()
            .map(|f| Statement::InstallFormula { label: f.clone(), formula: f.clone() }),
    );

    let casks = non_blank(&brew.casks);
    emit(
        &mut script,
        "Applications (Casks)",
        casks.iter().map(|cask| Statement::InstallCask {
            label: app_name_for(cask, &snapshot.applications),
            cask: cask.clone(),
        }),
    );

    let npm = snapshot
        .languages
        .node
        .as_ref()
        .map(|node| npm_packages(&node.global_packages, &config.filters.npm_exclude))
        .unwrap_or_default();
    if !npm.is_empty() {
        emit(
            &mut script,
            "Node.js Packages",
            std::iter::once(Statement::EnsureCommand {
                command: "node".to_string(),
                formula: "node".to_string(),
            })
            .chain(npm.iter().map(|package| Statement::InstallNpmGlobal { package: package.clone() })),
        );
    }

    let pip = snapshot
        .languages
        .python
        .as_ref()
        .map(|python| pip_packages(&python.pip_packages, &config.filters.pip_exclude))
        .unwrap_or_default();
    if !pip.is_empty() {
        emit(
            &mut script,
            "Python Packages",
            std::iter::once(Statement::EnsureCommand {
                command: "pip3".to_string(),
                formula: "python".to_string(),
            })
            .chain(pip.iter().map(|package| Statement::InstallPipPackage { package: package.clone() })),
        );
    }

    let extensions = snapshot
        .development
        .vscode
        .as_ref()
        .map(|vscode| non_blank(&vscode.extensions))
        .unwrap_or_default();
    emit(
        &mut script,
        "VS Code Extensions",
        extensions
            .iter()
            .map(|extension| Statement::InstallVscodeExtension { extension: extension.clone() }),
    );

    let git = snapshot
        .development
        .git
        .as_ref()
        .map(|git| git_config_pairs(&git.global_config))
        .unwrap_or_default();
    emit(
        &mut script,
        "Git Configuration",
        git.into_iter().map(|(key, value)| Statement::GitConfig { key, value }),
    );

    emit(&mut script, "Shell Configuration", dotfiles(snapshot));
    emit(&mut script, "SSH Configuration", ssh(snapshot));

    script.count("Homebrew formulae", formulae.len());
    script.count("Homebrew casks", casks.len());
    script.count("VS Code extensions", extensions.len());
    script.count("Node.js packages", npm.len());
    script.count("Python packages", pip.len());
    script.count("Applications found", snapshot.applications.len());

    script.next_steps = vec![
        format!("Restart your terminal or run: source {}", config.shell.rc_file),
        "Restore SSH keys manually (if needed)".to_string(),
        "Sign in to applications and services".to_string(),
    ];
    script
}

fn banner(snapshot: &Snapshot) -> Vec<(String, String)> {
    if snapshot.format == SnapshotFormat::LegacyText {
        return vec![("Source".to_string(), "legacy text scan".to_string())];
    }
    let meta = &snapshot.meta;
    let mut banner = vec![
        ("Hostname".to_string(), meta.hostname.clone()),
        ("Source OS".to_string(), format!("macOS {} ({})", meta.os_version, meta.arch)),
    ];
    if let Some(timestamp) = &meta.timestamp {
        banner.push(("Scanned".to_string(), timestamp.clone()));
    }
    banner
}

/// Push a section heading followed by its statements, unless there are none.
fn emit(script: &mut Script, title: &str, statements: impl IntoIterator<Item = Statement>) {
    let statements: Vec<Statement> = statements.into_iter().collect();
    if statements.is_empty() {
        return;
    }
    script.section(title);
    script.statements.extend(statements);
}

fn non_blank(items: &[String]) -> Vec<String> {
    items.iter().map(|item| item.trim()).filter(|item| !item.is_empty()).map(str::to_string).collect()
}

/// Human-readable `.app` name for a cask, when the scan found a matching app.
fn app_name_for(cask: &str, applications: &[String]) -> String {
    let slug = |name: &str| name.trim().to_ascii_lowercase().replace(' ', "-");
    applications
        .iter()
        .find(|app| slug(app) == cask)
        .map_or_else(|| cask.to_string(), |app| app.trim().to_string())
}

fn dotfiles(snapshot: &Snapshot) -> Vec<Statement> {
    let mut statements = Vec::new();
    for (name, content) in &snapshot.terminal.shell_configs {
        if content.trim().is_empty() {
            continue;
        }
        let Some(path) = dotfile_path(name) else {
            debug!(name = %name, "Skipping dotfile with an unusable name");
            continue;
        };
        statements.push(Statement::AppendToFile {
            label: path.as_str().to_string(),
            path,
            content: content.clone(),
        });
    }
    statements
}

fn ssh(snapshot: &Snapshot) -> Vec<Statement> {
    let Some(ssh) = &snapshot.terminal.ssh else {
        return Vec::new();
    };
    let config = ssh.config.as_deref().filter(|config| !config.trim().is_empty());
    let keys: Vec<&str> = ssh
        .keys_found
        .iter()
        .map(|key| key.trim())
        .filter(|key| !key.is_empty() && !key.ends_with(".pub"))
        .filter(|key| {
            let usable = validate_home_file_name(key);
            if !usable {
                debug!("Skipping ssh key entry that is not a plain file name");
            }
            usable
        })
        .collect();
    if config.is_none() && keys.is_empty() {
        return Vec::new();
    }

    let ssh_dir = HomePath::from_static(".ssh");
    let mut statements = vec![Statement::EnsureDir { path: ssh_dir, mode: 0o700 }];

    if let Some(config) = config {
        let path = HomePath::from_static(".ssh/config");
        statements.push(Statement::AppendToFile {
            label: "ssh config".to_string(),
            path: path.clone(),
            content: config.to_string(),
        });
        statements.push(Statement::Chmod { path, mode: 0o600 });
    }

    if !keys.is_empty() {
        statements.push(Statement::Notice {
            tone: Tone::Warn,
            text: "Private keys are not included. Transfer these over a separate secure channel:"
                .to_string(),
        });
        for key in keys {
            statements.push(Statement::Notice { tone: Tone::Info, text: format!("~/.ssh/{key}") });
        }
    }
    statements
}
