//! Core parsing module
//!
//! This module contains the parsing engine components:
//! - `registry` - Declared option schema, alias table and bound values
//! - `validator` - Per-kind value checks
//! - `parser` - Token classification and the parse state machine

pub mod parser;
pub mod registry;
pub mod validator;

pub use parser::{ParseOutcome, Parser, ParserConfig, RequiredPolicy};
pub use registry::{OptionEntry, OptionRegistry};
pub use validator::validate;
