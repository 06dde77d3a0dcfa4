//! Identifier and untrusted-name validation.

pub mod validation;

pub use validation::{validate_home_file_name, validate_home_relative_path, validate_identifier};
