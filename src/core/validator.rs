//! Value validation
//!
//! Pure checks deciding whether a raw string fits an option's declared kind.
//! The only I/O is the single `stat` behind the `File` and `Dir` checks.
//!
//! An empty `File`/`Dir` value is accepted and means "unset"; whether such
//! an option is actually needed is left to the required-option sweep.

use crate::types::{OptionKind, ValidationError};
use std::path::Path;
use tracing::trace;

/// Validate a raw value against a declared kind
///
/// # Errors
///
/// Returns an error if:
/// - `String`: the value is empty
/// - `Int`: the value is not `-?\d+`
/// - `Float`: the value is not `-?\d+(\.\d*)?` (a trailing `.` is allowed)
/// - `File`: the value is non-empty and is not an existing regular file
/// - `Dir`: the value is non-empty and is not an existing directory
pub fn validate(kind: OptionKind, raw: &str) -> Result<(), ValidationError> {
    let result = match kind {
        OptionKind::Flag => Ok(()),
        OptionKind::String => {
            if raw.is_empty() {
                Err(ValidationError::EmptyString)
            } else {
                Ok(())
            }
        }
        OptionKind::Int => {
            if is_integer(raw) {
                Ok(())
            } else {
                Err(ValidationError::NotInteger {
                    value: raw.to_string(),
                })
            }
        }
        OptionKind::Float => {
            if is_decimal(raw) {
                Ok(())
            } else {
                Err(ValidationError::NotFloat {
                    value: raw.to_string(),
                })
            }
        }
        OptionKind::File => {
            if raw.is_empty() || Path::new(raw).is_file() {
                Ok(())
            } else {
                Err(ValidationError::FileNotFound {
                    path: raw.to_string(),
                })
            }
        }
        OptionKind::Dir => {
            if raw.is_empty() || Path::new(raw).is_dir() {
                Ok(())
            } else {
                Err(ValidationError::DirNotFound {
                    path: raw.to_string(),
                })
            }
        }
    };

    trace!(kind = %kind, value = raw, accepted = result.is_ok(), "validated value");
    result
}

/// Split an optional leading `-` and the run of ASCII digits after it
///
/// Returns the digit run and whatever follows it.
fn split_digits(raw: &str) -> (&str, &str) {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned.split_at(end)
}

fn is_integer(raw: &str) -> bool {
    let (digits, rest) = split_digits(raw);
    !digits.is_empty() && rest.is_empty()
}

fn is_decimal(raw: &str) -> bool {
    let (digits, rest) = split_digits(raw);
    if digits.is_empty() {
        return false;
    }
    match rest.strip_prefix('.') {
        Some(fraction) => fraction.chars().all(|c| c.is_ascii_digit()),
        None => rest.is_empty(),
    }
}
