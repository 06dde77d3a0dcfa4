//! Command implementations shared by the CLI and the library API.

pub mod catalog;
pub mod generate;
pub mod inspect;
pub mod restore;
pub mod scan;
pub mod select;

use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ScriptWriter;

/// Path argument meaning standard input or output.
pub const STDIO_PATH: &str = "-";

/// Where a generated script goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Resolve an `-o` argument, using `default` when none was given.
    pub fn from_arg(arg: Option<PathBuf>, default: &str) -> Self {
        match arg {
            Some(path) if path.as_os_str() == STDIO_PATH => OutputTarget::Stdout,
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::File(PathBuf::from(default)),
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Send script text to its target.
pub(crate) fn emit<W: ScriptWriter>(
    writer: &W,
    target: &OutputTarget,
    text: &str,
) -> Result<(), AppError> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        OutputTarget::File(path) => writer.write_script(path, text),
    }
}

/// Read an input file, or standard input for `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == STDIO_PATH {
        let mut buffer = String::new();
        io::stdin().lock().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdout() {
        assert_eq!(OutputTarget::from_arg(Some(PathBuf::from("-")), "x.sh"), OutputTarget::Stdout);
    }

    #[test]
    fn default_used_without_argument() {
        assert_eq!(
            OutputTarget::from_arg(None, "setup-macos.sh"),
            OutputTarget::File(PathBuf::from("setup-macos.sh"))
        );
    }
}
