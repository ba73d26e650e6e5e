//! Types module
//!
//! Contains the data model shared by the parsing engine.
//! This module organizes types into logical submodules:
//! - `option`: Option schema, kinds and bound values
//! - `error`: Error types for declaration, validation and parsing

pub mod error;
pub mod option;

pub use error::{DeclarationError, ParseError, ValidationError};
pub use option::{OptionKind, OptionSpec, OptionValue};
