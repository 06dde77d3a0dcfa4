/// Validates an identifier string.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', '_', or (optionally) '.'
pub fn validate_identifier(id: &str, allow_dots: bool) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || (allow_dots && c == '.'))
}

/// Validates a file name that will be created directly under `$HOME`.
///
/// Dotfile names come from scanned snapshots, so they are treated as untrusted:
/// - Non-empty
/// - No path separators (/, \) and no null bytes
/// - Not "." or ".."
/// - Characters are alphanumeric, '.', '-', or '_' only
pub fn validate_home_file_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

/// Validates a `$HOME`-relative path such as `.config/fish/config.fish`.
///
/// Every `/`-separated segment must pass [`validate_home_file_name`].
pub fn validate_home_relative_path(path: &str) -> bool {
    !path.is_empty() && path.split('/').all(validate_home_file_name)
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $allow_dots:expr, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(id: &str) -> Result<Self, $crate::domain::AppError> {
                if $crate::domain::identifiers::validation::validate_identifier(id, $allow_dots) {
                    Ok(Self(id.to_string()))
                } else {
                    Err($err_variant(id.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::AppError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}
