use super::errors::CliError;
use crate::session::Session;
use crate::types::{OptionKind, OptionSpec};
use serde::Serialize;
use std::path::PathBuf;

pub const PROGRAM: &str = "optdecl";
pub const ABOUT: &str = "Chat with a model, generate a reply, or draft a commit message";
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const MAX_TOKENS_LIMIT: u32 = 200_000;

/// Commands selected by the first positional argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Interactive chat session
    Start,
    /// One-shot reply to a message
    Gen,
    /// Commit message from a diff
    Commit,
}

impl Command {
    fn parse(raw: &str) -> Result<Self, CliError> {
        match raw {
            "start" => Ok(Command::Start),
            "gen" => Ok(Command::Gen),
            "commit" => Ok(Command::Commit),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Gen => "gen",
            Command::Commit => "commit",
        }
    }
}

/// Declare the front end's options on a fresh session
pub fn declare_options(session: &mut Session) -> Result<(), CliError> {
    let specs = [
        OptionSpec::new("model", OptionKind::String)
            .short('m')
            .description("Model to send requests to")
            .default_value(DEFAULT_MODEL),
        OptionSpec::new("max-tokens", OptionKind::Int)
            .short('t')
            .description("Upper bound on reply length")
            .default_value(DEFAULT_MAX_TOKENS.to_string()),
        OptionSpec::new("temperature", OptionKind::Float).description("Sampling temperature"),
        OptionSpec::new("diff", OptionKind::File)
            .short('d')
            .description("Read the diff for 'commit' from this file"),
        OptionSpec::new("history-dir", OptionKind::Dir)
            .description("Directory holding chat history"),
        OptionSpec::new("system", OptionKind::String)
            .short('s')
            .description("System prompt"),
        OptionSpec::new("json", OptionKind::Flag)
            .short('j')
            .description("Print the resolved invocation as JSON"),
        OptionSpec::new("verbose", OptionKind::Flag)
            .short('v')
            .description("Also list every declared option"),
    ];

    for spec in specs {
        session.add_option(spec)?;
    }
    Ok(())
}

/// Resolved invocation of the front end
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CliArgs {
    pub command: Command,

    /// Message for `gen`; remaining positionals joined by spaces
    pub message: Option<String>,

    pub model: String,

    pub max_tokens: u32,

    pub temperature: Option<f64>,

    pub diff: Option<PathBuf>,

    pub history_dir: Option<PathBuf>,

    pub system: Option<String>,

    pub json: bool,

    pub verbose: bool,
}

impl CliArgs {
    /// Build the invocation from a parsed session
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No command, or an unknown command, was given
    /// - `gen` has no message, or `start`/`commit` have extra arguments
    /// - `--max-tokens` is zero or above the limit
    pub fn from_session(session: &Session) -> Result<Self, CliError> {
        let command = session.arg(1).ok_or(CliError::MissingCommand)?;
        let command = Command::parse(command)?;
        let rest = session.args().get(1..).unwrap_or_default();

        let message = match command {
            Command::Gen if rest.is_empty() => return Err(CliError::MissingMessage),
            Command::Gen => Some(rest.join(" ")),
            Command::Start | Command::Commit => {
                if let Some(arg) = rest.first() {
                    return Err(CliError::UnexpectedArgument {
                        command: command.as_str().to_string(),
                        arg: arg.clone(),
                    });
                }
                None
            }
        };

        let max_tokens = session
            .get_int("max-tokens")
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| (1..=MAX_TOKENS_LIMIT).contains(n))
            .ok_or_else(|| CliError::MaxTokensOutOfRange {
                value: session.get("max-tokens").to_string(),
                max: MAX_TOKENS_LIMIT,
            })?;

        Ok(CliArgs {
            command,
            message,
            model: session.get("model").to_string(),
            max_tokens,
            temperature: session.get_float("temperature"),
            diff: session.get_path("diff"),
            history_dir: session.get_path("history-dir"),
            system: Some(session.get("system"))
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            json: session.flag("json"),
            verbose: session.flag("verbose"),
        })
    }
}
