//! Parse session
//!
//! A `Session` owns everything one command invocation needs: the option
//! registry, the positional arguments of the last parse and the help state.
//! It is the public entry point that composes the registry, parser and help
//! renderer.
//!
//! # Re-entrancy
//!
//! `parse` may be called more than once. Each call clears the positional
//! arguments and the help state, but option values bound by earlier calls
//! stay as the baseline (declared defaults are not reapplied). Call
//! [`Session::init`] to start over.

use crate::core::{OptionRegistry, Parser, ParserConfig};
use crate::render::render_help;
use crate::types::{DeclarationError, OptionSpec, OptionValue, ParseError};
use std::path::PathBuf;
use tracing::debug;

/// State of one command invocation
///
/// # Examples
///
/// ```
/// use optdecl::{OptionKind, OptionSpec, Session};
///
/// let mut session = Session::new("tool", "Does things");
/// session
///     .add_option(OptionSpec::new("count", OptionKind::Int).short('c'))
///     .unwrap();
/// session
///     .add_option(OptionSpec::new("verbose", OptionKind::Flag).short('v'))
///     .unwrap();
///
/// session.parse(&["-vc", "5", "input.txt"]).unwrap();
///
/// assert_eq!(session.get("count"), "5");
/// assert!(session.flag("verbose"));
/// assert_eq!(session.arg(1), Some("input.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    program: String,
    description: String,
    registry: OptionRegistry,
    positionals: Vec<String>,
    help_shown: bool,
    last_help: Option<String>,
    config: ParserConfig,
}

impl Session {
    pub fn new(program: impl Into<String>, description: impl Into<String>) -> Self {
        Session {
            program: program.into(),
            description: description.into(),
            registry: OptionRegistry::new(),
            positionals: Vec::new(),
            help_shown: false,
            last_help: None,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Reset all state for a new invocation
    ///
    /// Drops every declared option and parse result. The parser
    /// configuration is kept.
    pub fn init(&mut self, program: impl Into<String>, description: impl Into<String>) {
        *self = Session::new(program, description).with_config(self.config);
    }

    /// Declare an option
    ///
    /// Declaring a long name twice replaces the earlier declaration.
    pub fn add_option(&mut self, spec: OptionSpec) -> Result<(), DeclarationError> {
        self.registry.declare(spec)
    }

    /// Parse an argument vector, excluding the program name
    ///
    /// On `-h`/`--help` the help text is rendered, [`Session::help_shown`]
    /// becomes true and parsing stops with success.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), ParseError> {
        self.positionals.clear();
        self.help_shown = false;
        self.last_help = None;

        debug!(program = %self.program, tokens = args.len(), "parsing arguments");
        let outcome = Parser::new(&mut self.registry, self.config).parse(args)?;

        self.positionals = outcome.positionals;
        if outcome.help_requested {
            self.help_shown = true;
            self.last_help = Some(self.help());
        }
        Ok(())
    }

    /// Value of an option as a string
    ///
    /// Empty when the option is unset or not declared; `"true"`/`"false"`
    /// for flags.
    pub fn get(&self, name: &str) -> &str {
        self.registry.value(name).map_or("", OptionValue::as_str)
    }

    /// Whether a flag is set; false for undeclared or non-flag options
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.registry.value(name), Some(OptionValue::Flag(true)))
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.text(name)?.parse().ok()
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.text(name)?.parse().ok()
    }

    pub fn get_path(&self, name: &str) -> Option<PathBuf> {
        self.text(name).map(PathBuf::from)
    }

    fn text(&self, name: &str) -> Option<&str> {
        match self.registry.value(name)? {
            OptionValue::Text(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    /// Positional arguments of the last parse, in input order
    pub fn args(&self) -> &[String] {
        &self.positionals
    }

    /// Positional argument by 1-based index
    pub fn arg(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.positionals.get(i))
            .map(String::as_str)
    }

    pub fn argc(&self) -> usize {
        self.positionals.len()
    }

    /// Render the help text for the declared options
    pub fn help(&self) -> String {
        render_help(&self.program, &self.description, &self.registry)
    }

    pub fn help_shown(&self) -> bool {
        self.help_shown
    }

    /// Help text rendered by the last parse, if it hit `-h`/`--help`
    pub fn last_help(&self) -> Option<&str> {
        self.last_help.as_deref()
    }

    pub fn spec(&self, name: &str) -> Option<&OptionSpec> {
        self.registry.spec(name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Declared options in name order
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.registry.entries().map(|entry| &entry.spec)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
