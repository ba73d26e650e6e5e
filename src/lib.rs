//! Declarative command-line option parsing
//! # Overview
//!
//! Callers declare named, typed options on a [`Session`], hand it the raw
//! argument vector and read back validated values and positional arguments,
//! or a structured [`ParseError`].
//!
//! # Architecture
//!
//! The crate is organized into several key components:
//!
//! - [`types`] - Option schema, values and error types
//! - [`core`] - Parsing engine:
//!   - [`core::registry`] - Declared options, short aliases and bound values
//!   - [`core::validator`] - Per-kind value checks
//!   - [`core::parser`] - Token classification and the parse state machine
//! - [`render`] - Help text rendering
//! - [`session`] - The public façade composing the above
//! - [`cli`] - The bundled binary's option schema and reporting
//!
//! # Token Grammar
//!
//! - `-h`, `--help`: render help and stop parsing
//! - `--name=value`: inline value (not allowed for flags)
//! - `--name [value]`: flag, or option taking the next token
//! - `-abc`, `-ovalue`, `-o value`: cluster of short options; the first
//!   value-taking option consumes the rest of the cluster or the next token
//! - `--`: every later token is positional
//! - anything else: positional
//!
//! # Example
//!
//! ```
//! use optdecl::{OptionKind, OptionSpec, ParseError, Session};
//!
//! let mut session = Session::new("tool", "");
//! session
//!     .add_option(OptionSpec::new("name", OptionKind::String).required())
//!     .unwrap();
//!
//! assert_eq!(
//!     session.parse(&["pos"]),
//!     Err(ParseError::MissingRequiredOption("name".to_string()))
//! );
//!
//! session.parse(&["--name=value", "pos1", "pos2"]).unwrap();
//! assert_eq!(session.get("name"), "value");
//! assert_eq!(session.argc(), 2);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod render;
pub mod session;
pub mod types;

pub use crate::core::{ParserConfig, RequiredPolicy};
pub use session::Session;
pub use types::{
    DeclarationError, OptionKind, OptionSpec, OptionValue, ParseError, ValidationError,
};
