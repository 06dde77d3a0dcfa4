//! Scan script: runs on the source Mac and writes a snapshot JSON file.
//!
//! The shell part only copies raw command output into a private temporary
//! directory. One Python program then reads those files and serializes the
//! snapshot with `json.dump`, so scanned text is never spliced into JSON or
//! program source.

use chrono::NaiveDate;

use crate::domain::script::heredoc::delimiter_for;
use crate::domain::script::render::{banner, preamble};

pub(crate) const TITLE: &str = "Mac Environment Scanner";

/// Default file name the scan script writes.
pub const SNAPSHOT_FILE: &str = "baseline-snapshot.json";

pub(crate) fn build(generated_on: Option<NaiveDate>) -> String {
    let mut script = preamble(TITLE, generated_on);
    script.push_str(PREREQUISITES);
    script.push('\n');
    script.push_str(&banner(TITLE, &[]));
    script.push_str(COLLECTORS);

    let delimiter = delimiter_for(SNAPSHOT_BUILDER_PY);
    script.push_str(&format!(
        "\nsection 'Building Snapshot'\nstatus_busy 'Writing snapshot'\n\
         if SUMMARY=$(python3 - \"$WORK_DIR\" \"$OUTPUT_FILE\" <<'{delimiter}'\n"
    ));
    script.push_str(SNAPSHOT_BUILDER_PY);
    script.push_str(&format!("{delimiter}\n)"));
    script.push_str(TRAILER);
    script
}

const PREREQUISITES: &str = r#"
if ! command -v python3 &>/dev/null; then
    printf '%s%s python3 is required to build the snapshot.%s\n' "$RED" "$ICON_CROSS" "$RESET"
    printf '  Install the Xcode Command Line Tools with: xcode-select --install\n'
    exit 1
fi

OUTPUT_FILE="${1:-baseline-snapshot.json}"
WORK_DIR=$(mktemp -d "${TMPDIR:-/tmp}/baseline-scan.XXXXXX") || exit 1
trap 'rm -rf "$WORK_DIR"' EXIT
"#;

const COLLECTORS: &str = r#"cursor_hide

section 'System'
status_busy 'Reading system information'
{ scutil --get ComputerName 2>/dev/null || hostname; } > "$WORK_DIR/hostname"
sw_vers -productVersion > "$WORK_DIR/os_version" 2>/dev/null
uname -m > "$WORK_DIR/arch"
status_ok 'System information'

section 'Package Managers'
status_busy 'Listing Homebrew packages'
if command -v brew &>/dev/null; then
    touch "$WORK_DIR/brew_installed"
    brew list --formula -1 > "$WORK_DIR/formulae" 2>/dev/null
    brew list --cask -1 > "$WORK_DIR/casks" 2>/dev/null
    brew tap > "$WORK_DIR/taps" 2>/dev/null
    status_ok 'Homebrew packages'
else
    status_skip 'Homebrew' 'Not installed'
fi

section 'Applications'
status_busy 'Indexing applications'
find /Applications "$HOME/Applications" -maxdepth 2 -name '*.app' -type d 2>/dev/null \
    | sed -e 's#.*/##' -e 's#\.app$##' | sort -u > "$WORK_DIR/applications"
status_ok 'Applications'

section 'Development'
status_busy 'Reading VS Code extensions'
if command -v code &>/dev/null; then
    touch "$WORK_DIR/code_installed"
    code --list-extensions > "$WORK_DIR/vscode_extensions" 2>/dev/null
    VSCODE_USER="$HOME/Library/Application Support/Code/User"
    cp "$VSCODE_USER/settings.json" "$WORK_DIR/vscode_settings.json" 2>/dev/null
    cp "$VSCODE_USER/keybindings.json" "$WORK_DIR/vscode_keybindings.json" 2>/dev/null
    status_ok 'VS Code extensions'
else
    status_skip 'VS Code' 'Not installed'
fi

status_busy 'Reading Git configuration'
git config --list --global > "$WORK_DIR/git_config" 2>/dev/null
[ -f "$HOME/.gitconfig" ] && cp "$HOME/.gitconfig" "$WORK_DIR/gitconfig"
status_ok 'Git configuration'

section 'Terminal'
status_busy 'Copying shell configuration'
mkdir -p "$WORK_DIR/shell"
for name in .zshrc .zprofile .zshenv .bashrc .bash_profile .profile .aliases .vimrc .tmux.conf; do
    [ -f "$HOME/$name" ] && cp "$HOME/$name" "$WORK_DIR/shell/$name"
done
status_ok 'Shell configuration'

status_busy 'Listing SSH keys'
[ -f "$HOME/.ssh/config" ] && cp "$HOME/.ssh/config" "$WORK_DIR/ssh_config"
for key in "$HOME"/.ssh/id_*; do
    [ -e "$key" ] && basename "$key"
done > "$WORK_DIR/ssh_keys"
status_ok 'SSH metadata (key names only)'

section 'Languages'
status_busy 'Detecting runtimes'
if command -v node &>/dev/null; then
    touch "$WORK_DIR/node_installed"
    if [ -d "${NVM_DIR:-$HOME/.nvm}/versions/node" ]; then
        ls -1 "${NVM_DIR:-$HOME/.nvm}/versions/node" > "$WORK_DIR/node_versions"
    else
        node --version > "$WORK_DIR/node_versions" 2>/dev/null
    fi
    npm ls -g --depth=0 --json > "$WORK_DIR/npm_global.json" 2>/dev/null
fi
[ -s "${NVM_DIR:-$HOME/.nvm}/nvm.sh" ] && touch "$WORK_DIR/nvm_installed"
if command -v python3 &>/dev/null; then
    touch "$WORK_DIR/python_installed"
    python3 -m pip freeze > "$WORK_DIR/pip_packages" 2>/dev/null
fi
if command -v pyenv &>/dev/null; then
    pyenv versions --bare > "$WORK_DIR/pyenv_versions" 2>/dev/null
    pyenv global > "$WORK_DIR/pyenv_global" 2>/dev/null
fi
command -v go &>/dev/null && go version > "$WORK_DIR/go_version" 2>/dev/null
command -v rustc &>/dev/null && rustc --version > "$WORK_DIR/rust_version" 2>/dev/null
status_ok 'Language runtimes'

section 'Cloud'
status_busy 'Detecting cloud tooling'
[ -d "$HOME/.aws" ] && touch "$WORK_DIR/cloud_aws"
command -v gcloud &>/dev/null && touch "$WORK_DIR/cloud_gcloud"
command -v az &>/dev/null && touch "$WORK_DIR/cloud_azure"
command -v kubectl &>/dev/null && touch "$WORK_DIR/cloud_kubectl"
command -v docker &>/dev/null && touch "$WORK_DIR/cloud_docker"
command -v terraform &>/dev/null && touch "$WORK_DIR/cloud_terraform"
status_ok 'Cloud tooling'
"#;

const TRAILER: &str = r#"; then
    status_ok 'Snapshot written'
else
    status_fail 'Snapshot'
    cursor_show
    exit 1
fi
cursor_show

echo ""
printf '  %s%s%s SCAN COMPLETE%s\n' "$GREEN" "$BOLD" "$ICON_SPARKLE" "$RESET"
printf '  %s%s%s\n' "$GRAY" "$SUMMARY" "$RESET"
printf '  %s%s Saved to:%s  %s%s%s\n' "$CYAN" "$ICON_ARROW" "$RESET" "$WHITE" "$OUTPUT_FILE" "$RESET"
echo ""
printf '  %sNext Steps:%s\n' "$BOLD" "$RESET"
printf '    %s1.%s %s\n' "$GREEN" "$RESET" 'Copy the snapshot to your new Mac'
printf '    %s2.%s %s\n' "$GREEN" "$RESET" 'Generate an installer: baseline restore baseline-snapshot.json'
printf '    %s3.%s %s\n' "$GREEN" "$RESET" 'Transfer SSH keys over a separate secure channel'
echo ""
"#;

/// Reads the scan directory and writes the snapshot JSON.
///
/// Invoked as `python3 - <work_dir> <output_file>`. Prints a one-line summary.
pub(crate) const SNAPSHOT_BUILDER_PY: &str = r#"import datetime
import json
import os
import sys

work_dir, output_path = sys.argv[1], sys.argv[2]


def read_text(name):
    try:
        with open(os.path.join(work_dir, name), encoding="utf-8", errors="replace") as handle:
            return handle.read()
    except OSError:
        return ""


def read_lines(name):
    return [line.strip() for line in read_text(name).splitlines() if line.strip()]


def first_line(name):
    lines = read_lines(name)
    return lines[0] if lines else ""


def read_json(name):
    text = read_text(name)
    if not text.strip():
        return None
    try:
        return json.loads(text)
    except ValueError:
        return None


def exists(name):
    return os.path.exists(os.path.join(work_dir, name))


def has_private_key(text):
    return any("-----BEGIN" in line and "PRIVATE KEY" in line for line in text.splitlines())


def npm_packages():
    tree = read_json("npm_global.json")
    deps = tree.get("dependencies") if isinstance(tree, dict) else None
    packages = []
    for name, info in sorted((deps or {}).items()):
        version = info.get("version") if isinstance(info, dict) else None
        packages.append(f"{name}@{version}" if version else name)
    return packages


shell_configs = {}
shell_dir = os.path.join(work_dir, "shell")
if os.path.isdir(shell_dir):
    for name in sorted(os.listdir(shell_dir)):
        content = read_text(os.path.join("shell", name))
        if not has_private_key(content):
            shell_configs[name] = content

snapshot = {
    "meta": {
        "version": "2.0.0",
        "timestamp": datetime.datetime.now(datetime.timezone.utc).strftime("%Y-%m-%dT%H:%M:%SZ"),
        "hostname": first_line("hostname") or "unknown",
        "os_version": first_line("os_version") or "unknown",
        "arch": first_line("arch") or "unknown",
    },
    "package_managers": {},
    "applications": read_lines("applications"),
    "development": {},
    "terminal": {"shell_configs": shell_configs},
    "languages": {},
}

if exists("brew_installed"):
    snapshot["package_managers"]["homebrew"] = {
        "formulae": read_lines("formulae"),
        "casks": read_lines("casks"),
        "taps": read_lines("taps"),
    }

if exists("code_installed"):
    vscode = {"extensions": read_lines("vscode_extensions")}
    for key, name in (("settings", "vscode_settings.json"), ("keybindings", "vscode_keybindings.json")):
        value = read_json(name)
        if value is not None:
            vscode[key] = value
    snapshot["development"]["vscode"] = vscode

git_config = read_text("git_config")
gitconfig_file = read_text("gitconfig")
if git_config.strip() or gitconfig_file.strip():
    git = {"global_config": git_config}
    if gitconfig_file.strip() and not has_private_key(gitconfig_file):
        git["gitconfig_file"] = gitconfig_file
    snapshot["development"]["git"] = git

ssh_config = read_text("ssh_config")
ssh_keys = read_lines("ssh_keys")
if ssh_config.strip() or ssh_keys:
    ssh = {"keys_found": ssh_keys}
    if ssh_config.strip() and not has_private_key(ssh_config):
        ssh["config"] = ssh_config
    snapshot["terminal"]["ssh"] = ssh

if exists("node_installed"):
    snapshot["languages"]["node"] = {
        "versions": read_lines("node_versions"),
        "global_packages": npm_packages(),
        "nvm_installed": exists("nvm_installed"),
    }

if exists("python_installed"):
    snapshot["languages"]["python"] = {
        "pyenv_versions": read_lines("pyenv_versions"),
        "pyenv_global": first_line("pyenv_global") or None,
        "pip_packages": read_lines("pip_packages"),
    }

for language, name in (("go", "go_version"), ("rust", "rust_version")):
    version = first_line(name)
    if version:
        snapshot["languages"][language] = version

cloud = {}
for tool in ("aws", "gcloud", "azure", "kubectl", "docker", "terraform"):
    if exists("cloud_" + tool):
        cloud[tool] = True
if cloud:
    snapshot["cloud"] = cloud

with open(output_path, "w", encoding="utf-8") as handle:
    json.dump(snapshot, handle, indent=2, ensure_ascii=False)
    handle.write("\n")

homebrew = snapshot["package_managers"].get("homebrew", {})
print(
    f"{len(homebrew.get('formulae', []))} formulae, "
    f"{len(homebrew.get('casks', []))} casks, "
    f"{len(snapshot['applications'])} applications, "
    f"{len(shell_configs)} dotfiles"
)
"#;
