use crate::types::{DeclarationError, ParseError};
use thiserror::Error;

/// Errors surfaced by the command-line front end
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid option declaration: {0}")]
    Declaration(#[from] DeclarationError),

    #[error("Missing command (expected one of: start, gen, commit)")]
    MissingCommand,

    #[error("Unknown command '{0}' (expected one of: start, gen, commit)")]
    UnknownCommand(String),

    #[error("Command 'gen' requires a message")]
    MissingMessage,

    #[error("Unexpected argument '{arg}' for command '{command}'")]
    UnexpectedArgument { command: String, arg: String },

    #[error("--max-tokens must be between 1 and {max}, got: {value}")]
    MaxTokensOutOfRange { value: String, max: u32 },

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Output(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Output(error.to_string())
    }
}
