//! Error types for option declaration, value validation and parsing
//!
//! Errors are returned to the caller and never printed by the library.
//! Each message names the offending option and, where relevant, the
//! expected format so a user can correct the command line without
//! consulting the documentation.
//!
//! # Error Categories
//!
//! - **Declaration Errors**: malformed `OptionSpec` handed to the registry
//! - **Validation Errors**: a raw value that does not fit its declared kind
//! - **Parse Errors**: anything wrong with the argument vector itself

use super::option::OptionKind;
use thiserror::Error;

/// Errors raised when declaring an option
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeclarationError {
    /// The long name is the registry key and must not be empty
    #[error("Option name must not be empty")]
    EmptyName,

    /// Flags only accept `"true"` or `"false"` as a default
    #[error("Flag --{name} has invalid default '{value}' (expected 'true' or 'false')")]
    InvalidFlagDefault {
        /// Long name of the flag
        name: String,
        /// The rejected default
        value: String,
    },
}

/// Rejection of a raw value by the validator
///
/// Messages are lowercase because they are usually rendered inside
/// [`ParseError::Invalid`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("value must not be empty")]
    EmptyString,

    #[error("'{value}' is not an integer")]
    NotInteger { value: String },

    #[error("'{value}' is not a decimal number")]
    NotFloat { value: String },

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("directory not found: {path}")]
    DirNotFound { path: String },
}

/// Errors raised while parsing an argument vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Token did not match any declared option
    ///
    /// Holds the option as written: `--name` or `-x`.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// A flag was given an inline value (`--verbose=yes`)
    #[error("Option --{0} is a flag and takes no value")]
    FlagTakesNoValue(String),

    /// A value-taking option was the last token
    #[error("Option --{0} requires a value")]
    MissingValue(String),

    #[error("Missing required option: --{0}")]
    MissingRequiredOption(String),

    /// Every missing required option, when collecting all of them
    #[error("Missing required options: {}", .0.iter().map(|n| format!("--{}", n)).collect::<Vec<_>>().join(", "))]
    MissingRequiredOptions(Vec<String>),

    /// A supplied value failed validation for its declared kind
    #[error("Invalid value for --{name} (expected {kind}): {source}")]
    Invalid {
        /// Long name of the option
        name: String,
        /// Declared kind of the option
        kind: OptionKind,
        #[source]
        source: ValidationError,
    },
}

// Helper functions for creating common errors

impl ParseError {
    /// Create an UnknownOption error for a long option
    pub fn unknown_long(name: &str) -> Self {
        ParseError::UnknownOption(format!("--{}", name))
    }

    /// Create an UnknownOption error for a short option
    pub fn unknown_short(short: char) -> Self {
        ParseError::UnknownOption(format!("-{}", short))
    }

    pub fn flag_takes_no_value(name: &str) -> Self {
        ParseError::FlagTakesNoValue(name.to_string())
    }

    pub fn missing_value(name: &str) -> Self {
        ParseError::MissingValue(name.to_string())
    }

    pub fn missing_required(name: &str) -> Self {
        ParseError::MissingRequiredOption(name.to_string())
    }

    /// Wrap a validation error with the option it was raised for
    pub fn invalid(name: &str, kind: OptionKind, source: ValidationError) -> Self {
        ParseError::Invalid {
            name: name.to_string(),
            kind,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    #[case::empty_name(DeclarationError::EmptyName, "Option name must not be empty")]
    #[case::flag_default(
        DeclarationError::InvalidFlagDefault { name: "verbose".to_string(), value: "yes".to_string() },
        "Flag --verbose has invalid default 'yes' (expected 'true' or 'false')"
    )]
    fn test_declaration_error_display(#[case] error: DeclarationError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::unknown_long(ParseError::unknown_long("colour"), "Unknown option: --colour")]
    #[case::unknown_short(ParseError::unknown_short('x'), "Unknown option: -x")]
    #[case::flag_value(
        ParseError::flag_takes_no_value("verbose"),
        "Option --verbose is a flag and takes no value"
    )]
    #[case::missing_value(ParseError::missing_value("output"), "Option --output requires a value")]
    #[case::missing_required(
        ParseError::missing_required("name"),
        "Missing required option: --name"
    )]
    #[case::missing_required_all(
        ParseError::MissingRequiredOptions(vec!["input".to_string(), "name".to_string()]),
        "Missing required options: --input, --name"
    )]
    #[case::invalid_int(
        ParseError::invalid("count", OptionKind::Int, ValidationError::NotInteger { value: "abc".to_string() }),
        "Invalid value for --count (expected int): 'abc' is not an integer"
    )]
    #[case::invalid_file(
        ParseError::invalid("diff", OptionKind::File, ValidationError::FileNotFound { path: "nope.txt".to_string() }),
        "Invalid value for --diff (expected file): file not found: nope.txt"
    )]
    #[case::invalid_empty(
        ParseError::invalid("name", OptionKind::String, ValidationError::EmptyString),
        "Invalid value for --name (expected string): value must not be empty"
    )]
    fn test_parse_error_display(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_invalid_exposes_source() {
        let error = ParseError::invalid(
            "ratio",
            OptionKind::Float,
            ValidationError::NotFloat {
                value: "1.2.3".to_string(),
            },
        );
        let source = error.source().expect("Invalid should carry a source");
        assert_eq!(source.to_string(), "'1.2.3' is not a decimal number");
    }
}
