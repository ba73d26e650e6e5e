//! Option schema types
//!
//! This module defines the declared shape of an option (`OptionSpec`), its
//! closed set of value kinds (`OptionKind`) and the value currently bound
//! to it (`OptionValue`).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Value kinds an option can be declared with
///
/// The kind decides how the tokenizer treats the option (flags never take a
/// value) and which check the validator applies to a supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Boolean presence switch; never carries a value
    Flag,

    /// Any non-empty string
    String,

    /// Base-10 signed integer literal (`-?\d+`)
    Int,

    /// Signed decimal literal (`-?\d+(\.\d*)?`)
    Float,

    /// Path to an existing regular file
    File,

    /// Path to an existing directory
    Dir,
}

impl OptionKind {
    /// Lowercase name used in help signatures and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Flag => "flag",
            OptionKind::String => "string",
            OptionKind::Int => "int",
            OptionKind::Float => "float",
            OptionKind::File => "file",
            OptionKind::Dir => "dir",
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, OptionKind::Flag)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flag" => Ok(OptionKind::Flag),
            "string" => Ok(OptionKind::String),
            "int" => Ok(OptionKind::Int),
            "float" => Ok(OptionKind::Float),
            "file" => Ok(OptionKind::File),
            "dir" => Ok(OptionKind::Dir),
            _ => Err(format!("Unknown option kind: '{}'", s)),
        }
    }
}

/// Declared schema of a single option
///
/// Built with [`OptionSpec::new`] and the chained setters, then handed to
/// [`crate::Session::add_option`].
///
/// # Examples
///
/// ```
/// use optdecl::{OptionKind, OptionSpec};
///
/// let spec = OptionSpec::new("output", OptionKind::String)
///     .short('o')
///     .description("Where to write the result")
///     .default_value("out.txt");
///
/// assert_eq!(spec.short_name, Some('o'));
/// assert_eq!(spec.default.as_deref(), Some("out.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    /// Unique key, matched by `--long_name`
    pub long_name: String,

    /// Single-character alias, matched by `-c`
    pub short_name: Option<char>,

    pub kind: OptionKind,

    /// One-line description shown in help output
    pub description: String,

    /// Raw default value; for flags only `"true"` or `"false"`
    pub default: Option<String>,

    /// Whether a value must be present once parsing finishes
    pub required: bool,
}

impl OptionSpec {
    pub fn new(long_name: impl Into<String>, kind: OptionKind) -> Self {
        OptionSpec {
            long_name: long_name.into(),
            short_name: None,
            kind,
            description: String::new(),
            default: None,
            required: false,
        }
    }

    pub fn short(mut self, short_name: char) -> Self {
        self.short_name = Some(short_name);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value an option starts with right after declaration
    pub(crate) fn initial_value(&self) -> OptionValue {
        match self.kind {
            OptionKind::Flag => OptionValue::Flag(self.default.as_deref() == Some("true")),
            _ => OptionValue::Text(self.default.clone().unwrap_or_default()),
        }
    }
}

/// Value currently bound to a declared option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),

    /// Raw text exactly as supplied; empty means unset
    Text(String),
}

impl OptionValue {
    /// String view of the value (`"true"`/`"false"` for flags)
    pub fn as_str(&self) -> &str {
        match self {
            OptionValue::Flag(true) => "true",
            OptionValue::Flag(false) => "false",
            OptionValue::Text(text) => text,
        }
    }

    /// Whether the value satisfies a `required` declaration
    pub fn is_present(&self) -> bool {
        match self {
            OptionValue::Flag(set) => *set,
            OptionValue::Text(text) => !text.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("flag", OptionKind::Flag)]
    #[case("string", OptionKind::String)]
    #[case("INT", OptionKind::Int)]
    #[case("float", OptionKind::Float)]
    #[case("file", OptionKind::File)]
    #[case("Dir", OptionKind::Dir)]
    fn test_kind_from_str(#[case] input: &str, #[case] expected: OptionKind) {
        assert_eq!(input.parse::<OptionKind>().unwrap(), expected);
        assert_eq!(expected.to_string(), input.to_lowercase());
    }

    #[test]
    fn test_kind_from_str_unknown() {
        let err = "bool".parse::<OptionKind>().unwrap_err();
        assert_eq!(err, "Unknown option kind: 'bool'");
    }

    #[rstest]
    #[case::flag_no_default(OptionSpec::new("v", OptionKind::Flag), OptionValue::Flag(false))]
    #[case::flag_true(
        OptionSpec::new("v", OptionKind::Flag).default_value("true"),
        OptionValue::Flag(true)
    )]
    #[case::flag_false(
        OptionSpec::new("v", OptionKind::Flag).default_value("false"),
        OptionValue::Flag(false)
    )]
    #[case::text_unset(OptionSpec::new("n", OptionKind::Int), OptionValue::Text(String::new()))]
    #[case::text_default(
        OptionSpec::new("n", OptionKind::Int).default_value("7"),
        OptionValue::Text("7".to_string())
    )]
    fn test_initial_value(#[case] spec: OptionSpec, #[case] expected: OptionValue) {
        assert_eq!(spec.initial_value(), expected);
    }

    #[rstest]
    #[case(OptionValue::Flag(true), "true", true)]
    #[case(OptionValue::Flag(false), "false", false)]
    #[case(OptionValue::Text("x".to_string()), "x", true)]
    #[case(OptionValue::Text(String::new()), "", false)]
    fn test_value_views(
        #[case] value: OptionValue,
        #[case] as_str: &str,
        #[case] present: bool,
    ) {
        assert_eq!(value.as_str(), as_str);
        assert_eq!(value.is_present(), present);
    }
}
