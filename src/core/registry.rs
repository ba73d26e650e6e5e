//! Option registry
//!
//! This module provides the `OptionRegistry` which holds the declared option
//! schema, the short-alias table and the value currently bound to every
//! option.
//!
//! The registry is responsible for:
//! - Accepting (and silently overwriting) option declarations
//! - Initializing each option's value from its default
//! - Resolving short aliases to long names
//! - Providing name-sorted views for help output and the required sweep

use crate::types::{DeclarationError, OptionSpec, OptionValue};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// A declared option together with its current value
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    pub spec: OptionSpec,
    pub value: OptionValue,
}

/// Declared options and their bound values
///
/// Entries are keyed by long name in a `BTreeMap` so every iteration is in
/// lexicographic order. Short aliases live in a separate table; the last
/// declaration to claim a character wins.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    entries: BTreeMap<String, OptionEntry>,
    aliases: HashMap<char, String>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option
    ///
    /// Inserts the spec and (re)initializes its value from the default. A
    /// second declaration of the same long name replaces the first one's
    /// spec and value. Aliases are only ever overwritten by a later claim on
    /// the same character, so an alias the earlier declaration registered
    /// keeps resolving to this option.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The long name is empty
    /// - A flag's default is anything other than `"true"` or `"false"`
    pub fn declare(&mut self, spec: OptionSpec) -> Result<(), DeclarationError> {
        if spec.long_name.is_empty() {
            return Err(DeclarationError::EmptyName);
        }

        if spec.kind.is_flag() {
            if let Some(default) = spec.default.as_deref() {
                if default != "true" && default != "false" {
                    return Err(DeclarationError::InvalidFlagDefault {
                        name: spec.long_name.clone(),
                        value: default.to_string(),
                    });
                }
            }
        }

        if self.entries.contains_key(&spec.long_name) {
            warn!(option = %spec.long_name, "redeclaring option, previous declaration replaced");
        }

        if let Some(short) = spec.short_name {
            if let Some(previous) = self.aliases.insert(short, spec.long_name.clone()) {
                if previous != spec.long_name {
                    warn!(short = %short, from = %previous, to = %spec.long_name, "short alias re-pointed");
                }
            }
        }

        let value = spec.initial_value();
        self.entries
            .insert(spec.long_name.clone(), OptionEntry { spec, value });

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&OptionEntry> {
        self.entries.get(name)
    }

    pub fn spec(&self, name: &str) -> Option<&OptionSpec> {
        self.entries.get(name).map(|entry| &entry.spec)
    }

    pub fn value(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name).map(|entry| &entry.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Long name currently owning a short alias
    pub fn resolve_short(&self, short: char) -> Option<&str> {
        self.aliases.get(&short).map(String::as_str)
    }

    /// Short alias of an option, if the alias still points back at it
    pub fn active_short(&self, spec: &OptionSpec) -> Option<char> {
        spec.short_name
            .filter(|short| self.resolve_short(*short) == Some(spec.long_name.as_str()))
    }

    /// Bind a value to a declared option
    ///
    /// Returns `false` (and binds nothing) when the option is not declared.
    pub fn bind(&mut self, name: &str, value: OptionValue) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => false,
        }
    }

    /// All entries sorted by long name
    pub fn entries(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
