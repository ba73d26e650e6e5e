//! Argument tokenizer and parser
//!
//! This module consumes a raw argument vector left to right, classifies each
//! token and drives the registry and validator with it.
//!
//! Tokens are classified in this priority order:
//! 1. `-h` / `--help` stops parsing immediately with success
//! 2. `--` ends option processing; everything after it is positional
//! 3. `--name=value` binds an inline value (illegal for flags)
//! 4. `--name` sets a flag, or takes the next token as its value
//! 5. `-abc` is a cluster of short options (see [`Parser::apply_cluster`])
//! 6. Anything else, including a lone `-`, is positional
//!
//! Parsing aborts on the first error. Bindings made by earlier tokens stay
//! in the registry. The required-option sweep only runs once every token has
//! been consumed without error.

use crate::core::registry::OptionRegistry;
use crate::core::validator::validate;
use crate::types::{OptionKind, OptionValue, ParseError};
use tracing::debug;

/// How the required-option sweep reports missing options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequiredPolicy {
    /// Fail with the first missing option in name order
    #[default]
    FirstMissing,

    /// Fail once with every missing option
    CollectAll,
}

/// Parser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub required_policy: RequiredPolicy,
}

impl ParserConfig {
    pub fn new(required_policy: RequiredPolicy) -> Self {
        ParserConfig { required_policy }
    }
}

/// Result of a successful parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Positional arguments in input order
    pub positionals: Vec<String>,

    /// Whether `-h`/`--help` cut parsing short
    pub help_requested: bool,
}

/// Classification of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Help,
    EndOfOptions,
    LongWithValue { name: &'a str, value: &'a str },
    Long(&'a str),
    Cluster(&'a str),
    Positional(&'a str),
}

fn classify(token: &str) -> Token<'_> {
    match token {
        "-h" | "--help" => Token::Help,
        "--" => Token::EndOfOptions,
        _ => {
            if let Some(long) = token.strip_prefix("--") {
                match long.split_once('=') {
                    Some((name, value)) => Token::LongWithValue { name, value },
                    None => Token::Long(long),
                }
            } else if let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) {
                Token::Cluster(cluster)
            } else {
                Token::Positional(token)
            }
        }
    }
}

/// Single-use parser over a registry
///
/// Mutates the registry's value store as tokens are bound.
pub struct Parser<'r> {
    registry: &'r mut OptionRegistry,
    config: ParserConfig,
}

impl<'r> Parser<'r> {
    pub fn new(registry: &'r mut OptionRegistry, config: ParserConfig) -> Self {
        Parser { registry, config }
    }

    /// Parse an argument vector (without the program name)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A token names an undeclared option
    /// - A flag is given an inline value
    /// - A value-taking option has no value available
    /// - A value fails validation for its option's kind
    /// - A required option has no value once all tokens are consumed
    pub fn parse<S: AsRef<str>>(mut self, args: &[S]) -> Result<ParseOutcome, ParseError> {
        let mut outcome = ParseOutcome::default();
        let mut cursor = 0;

        while cursor < args.len() {
            let token: &str = args[cursor].as_ref();
            let next: Option<&str> = args.get(cursor + 1).map(AsRef::as_ref);

            match classify(token) {
                Token::Help => {
                    debug!("help requested, remaining tokens ignored");
                    outcome.help_requested = true;
                    return Ok(outcome);
                }
                Token::EndOfOptions => {
                    outcome
                        .positionals
                        .extend(args[cursor + 1..].iter().map(|a| a.as_ref().to_string()));
                    debug!(count = args.len() - cursor - 1, "end of options marker");
                    break;
                }
                Token::LongWithValue { name, value } => {
                    let kind = self.kind_of_long(name)?;
                    if kind.is_flag() {
                        return Err(ParseError::flag_takes_no_value(name));
                    }
                    self.bind_value(name, kind, value)?;
                    cursor += 1;
                }
                Token::Long(name) => {
                    let kind = self.kind_of_long(name)?;
                    if kind.is_flag() {
                        self.bind_flag(name);
                        cursor += 1;
                    } else {
                        let value = next.ok_or_else(|| ParseError::missing_value(name))?;
                        self.bind_value(name, kind, value)?;
                        cursor += 2;
                    }
                }
                Token::Cluster(cluster) => {
                    let consumed_next = self.apply_cluster(cluster, next)?;
                    cursor += if consumed_next { 2 } else { 1 };
                }
                Token::Positional(arg) => {
                    debug!(arg = arg, "positional argument");
                    outcome.positionals.push(arg.to_string());
                    cursor += 1;
                }
            }
        }

        self.check_required()?;
        Ok(outcome)
    }

    /// Apply a cluster of short options such as `-vq` or `-ofile.txt`
    ///
    /// Flags are set and the walk continues. The first value-taking option
    /// takes the rest of the cluster as its value, or the next token when
    /// the rest is empty, and ends the cluster.
    ///
    /// Returns whether the next token was consumed.
    fn apply_cluster(&mut self, cluster: &str, next: Option<&str>) -> Result<bool, ParseError> {
        for (index, short) in cluster.char_indices() {
            let name = self
                .registry
                .resolve_short(short)
                .ok_or_else(|| ParseError::unknown_short(short))?
                .to_string();
            let kind = self.kind_of_long(&name)?;

            if kind.is_flag() {
                self.bind_flag(&name);
                continue;
            }

            let rest = &cluster[index + short.len_utf8()..];
            if !rest.is_empty() {
                self.bind_value(&name, kind, rest)?;
                return Ok(false);
            }

            let value = next.ok_or_else(|| ParseError::missing_value(&name))?;
            self.bind_value(&name, kind, value)?;
            return Ok(true);
        }

        Ok(false)
    }

    fn kind_of_long(&self, name: &str) -> Result<OptionKind, ParseError> {
        self.registry
            .spec(name)
            .map(|spec| spec.kind)
            .ok_or_else(|| ParseError::unknown_long(name))
    }

    fn bind_flag(&mut self, name: &str) {
        debug!(option = name, "flag set");
        self.registry.bind(name, OptionValue::Flag(true));
    }

    fn bind_value(&mut self, name: &str, kind: OptionKind, raw: &str) -> Result<(), ParseError> {
        validate(kind, raw).map_err(|e| ParseError::invalid(name, kind, e))?;
        debug!(option = name, value = raw, "value bound");
        self.registry.bind(name, OptionValue::Text(raw.to_string()));
        Ok(())
    }

    fn check_required(&self) -> Result<(), ParseError> {
        let mut missing = self
            .registry
            .entries()
            .filter(|entry| entry.spec.required && !entry.value.is_present())
            .map(|entry| entry.spec.long_name.clone());

        match self.config.required_policy {
            RequiredPolicy::FirstMissing => match missing.next() {
                Some(name) => Err(ParseError::missing_required(&name)),
                None => Ok(()),
            },
            RequiredPolicy::CollectAll => {
                let missing: Vec<String> = missing.collect();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(ParseError::MissingRequiredOptions(missing))
                }
            }
        }
    }
}
