// CLI module
// Front end that declares its options on a Session and reports the result

mod args;
mod errors;

pub use args::{
    declare_options, CliArgs, Command, ABOUT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, MAX_TOKENS_LIMIT,
    PROGRAM,
};
pub use errors::CliError;

use crate::session::Session;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// What the binary should do after parsing
#[derive(Debug, Clone)]
pub enum Invocation {
    /// `-h`/`--help` was given; print this and exit successfully
    Help(String),
    Run {
        args: CliArgs,
        session: Session,
    },
}

/// Install the stderr log subscriber
///
/// The filter is read from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse the argument vector (without the program name)
///
/// # Returns
///
/// Returns `Invocation::Help` when help was requested, otherwise the
/// resolved arguments together with the session they were read from.
pub fn parse_args<S: AsRef<str>>(argv: &[S]) -> Result<Invocation, CliError> {
    let mut session = Session::new(PROGRAM, ABOUT);
    declare_options(&mut session)?;
    session.parse(argv)?;

    if let Some(help) = session.last_help() {
        return Ok(Invocation::Help(help.to_string()));
    }

    let args = CliArgs::from_session(&session)?;
    debug!(command = ?args.command, "resolved invocation");
    Ok(Invocation::Run { args, session })
}

/// Write the resolved invocation to `output`
///
/// JSON when `--json` is set, otherwise one `key: value` line per field.
/// With `--verbose` the text form also lists every declared option.
pub fn write_report(
    args: &CliArgs,
    session: &Session,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    if args.json {
        serde_json::to_writer_pretty(&mut *output, args)?;
        writeln!(output)?;
        return Ok(());
    }

    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    let path = |value: &Option<std::path::PathBuf>| value.as_ref().map(|p| p.display().to_string());

    writeln!(output, "command: {}", args.command.as_str())?;
    writeln!(output, "message: {}", or_dash(args.message.clone()))?;
    writeln!(output, "model: {}", args.model)?;
    writeln!(output, "max_tokens: {}", args.max_tokens)?;
    writeln!(
        output,
        "temperature: {}",
        or_dash(args.temperature.map(|t| t.to_string()))
    )?;
    writeln!(output, "diff: {}", or_dash(path(&args.diff)))?;
    writeln!(output, "history_dir: {}", or_dash(path(&args.history_dir)))?;
    writeln!(output, "system: {}", or_dash(args.system.clone()))?;

    if args.verbose {
        writeln!(output, "options:")?;
        for spec in session.options() {
            writeln!(
                output,
                "  --{} ({}) = {}",
                spec.long_name,
                spec.kind,
                session.get(&spec.long_name)
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(argv: &[&str]) -> String {
        let Invocation::Run { args, session } = parse_args(argv).unwrap() else {
            panic!("expected a run invocation");
        };
        let mut output = Vec::new();
        write_report(&args, &session, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_help_invocation() {
        let invocation = parse_args(&["--help", "--bogus"]).unwrap();
        let Invocation::Help(text) = invocation else {
            panic!("expected help");
        };
        assert!(text.starts_with("Usage: optdecl [OPTIONS] [ARGS]...\n"));
        assert!(text.contains("  -m, --model <string>"));
    }

    #[test]
    fn test_text_report() {
        let text = report(&["gen", "hello"]);
        let expected = format!(
            "command: gen\nmessage: hello\nmodel: {}\nmax_tokens: 1000\ntemperature: -\ndiff: -\nhistory_dir: -\nsystem: -\n",
            DEFAULT_MODEL
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_verbose_report_lists_options() {
        let text = report(&["-v", "start"]);
        assert!(text.contains("options:\n"));
        assert!(text.contains("  --max-tokens (int) = 1000\n"));
        assert!(text.contains("  --verbose (flag) = true\n"));
        assert!(text.contains("  --diff (file) = \n"));
    }

    #[test]
    fn test_json_report() {
        let text = report(&["--json", "-t", "42", "commit"]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["command"], "commit");
        assert_eq!(value["max_tokens"], 42);
        assert_eq!(value["message"], serde_json::Value::Null);
        assert_eq!(value["json"], true);
    }
}
