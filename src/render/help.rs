//! Help text rendering
//!
//! Builds the usage text from the registry's schema. Options are listed in
//! name order with their descriptions aligned in a single column; the fixed
//! `-h, --help` line always comes last.

use crate::core::OptionRegistry;
use crate::types::OptionSpec;
use std::fmt::Write;

const HELP_SIGNATURE: &str = "-h, --help";
const HELP_DESCRIPTION: &str = "Show this help message and exit";

/// Render the full help text
///
/// # Examples
///
/// ```
/// use optdecl::core::OptionRegistry;
/// use optdecl::render::render_help;
/// use optdecl::{OptionKind, OptionSpec};
///
/// let mut registry = OptionRegistry::new();
/// registry
///     .declare(OptionSpec::new("verbose", OptionKind::Flag).short('v').description("Talk more"))
///     .unwrap();
///
/// let help = render_help("tool", "", &registry);
/// assert!(help.contains("  -v, --verbose  Talk more\n"));
/// ```
pub fn render_help(program: &str, description: &str, registry: &OptionRegistry) -> String {
    let rows: Vec<(String, String)> = registry
        .entries()
        .map(|entry| {
            let short = registry.active_short(&entry.spec);
            (signature(&entry.spec, short), annotation(&entry.spec))
        })
        .collect();

    let width = rows
        .iter()
        .map(|(sig, _)| sig.chars().count())
        .chain(std::iter::once(HELP_SIGNATURE.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "Usage: {} [OPTIONS] [ARGS]...", program);
    if !description.is_empty() {
        let _ = writeln!(out, "\n{}", description);
    }
    out.push_str("\nOptions:\n");

    for (sig, text) in &rows {
        push_row(&mut out, sig, text, width);
    }
    push_row(&mut out, HELP_SIGNATURE, HELP_DESCRIPTION, width);

    out
}

/// `-x, --name <kind>`, with four spaces standing in for a missing alias
fn signature(spec: &OptionSpec, short: Option<char>) -> String {
    let mut sig = match short {
        Some(short) => format!("-{}, --{}", short, spec.long_name),
        None => format!("    --{}", spec.long_name),
    };
    if !spec.kind.is_flag() {
        let _ = write!(sig, " <{}>", spec.kind);
    }
    sig
}

/// Description followed by `(required)` or `(default: v)`
fn annotation(spec: &OptionSpec) -> String {
    let note = if spec.required {
        Some("(required)".to_string())
    } else {
        spec.default
            .as_deref()
            .filter(|_| !spec.kind.is_flag())
            .map(|default| format!("(default: {})", default))
    };

    match note {
        Some(note) if spec.description.is_empty() => note,
        Some(note) => format!("{} {}", spec.description, note),
        None => spec.description.clone(),
    }
}

fn push_row(out: &mut String, sig: &str, text: &str, width: usize) {
    let line = format!("  {:<width$}  {}", sig, text, width = width);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptionKind;
    use rstest::rstest;

    #[rstest]
    #[case::flag_with_alias(OptionSpec::new("verbose", OptionKind::Flag), Some('v'), "-v, --verbose")]
    #[case::flag_no_alias(OptionSpec::new("dry-run", OptionKind::Flag), None, "    --dry-run")]
    #[case::value_with_alias(OptionSpec::new("count", OptionKind::Int), Some('c'), "-c, --count <int>")]
    #[case::value_no_alias(OptionSpec::new("root", OptionKind::Dir), None, "    --root <dir>")]
    fn test_signature(
        #[case] spec: OptionSpec,
        #[case] short: Option<char>,
        #[case] expected: &str,
    ) {
        assert_eq!(signature(&spec, short), expected);
    }

    #[rstest]
    #[case::plain(OptionSpec::new("a", OptionKind::String).description("Name"), "Name")]
    #[case::required_wins(
        OptionSpec::new("a", OptionKind::String).description("Name").default_value("x").required(),
        "Name (required)"
    )]
    #[case::default(
        OptionSpec::new("a", OptionKind::Int).description("Count").default_value("5"),
        "Count (default: 5)"
    )]
    #[case::flag_default_hidden(
        OptionSpec::new("a", OptionKind::Flag).description("Switch").default_value("true"),
        "Switch"
    )]
    #[case::empty_default_shown(
        OptionSpec::new("a", OptionKind::String).description("Name").default_value(""),
        "Name (default: )"
    )]
    #[case::no_default(OptionSpec::new("a", OptionKind::String).description("Name"), "Name")]
    #[case::note_only(OptionSpec::new("a", OptionKind::String).required(), "(required)")]
    fn test_annotation(#[case] spec: OptionSpec, #[case] expected: &str) {
        assert_eq!(annotation(&spec), expected);
    }

    #[test]
    fn test_render_full() {
        let mut registry = OptionRegistry::new();
        registry
            .declare(
                OptionSpec::new("output", OptionKind::String)
                    .short('o')
                    .description("Output path")
                    .required(),
            )
            .unwrap();
        registry
            .declare(
                OptionSpec::new("count", OptionKind::Int)
                    .short('c')
                    .description("How many")
                    .default_value("5"),
            )
            .unwrap();
        registry
            .declare(OptionSpec::new("dry-run", OptionKind::Flag).description("Do nothing"))
            .unwrap();

        let expected = "\
Usage: tool [OPTIONS] [ARGS]...

Does things.

Options:
  -c, --count <int>      How many (default: 5)
      --dry-run          Do nothing
  -o, --output <string>  Output path (required)
  -h, --help             Show this help message and exit
";
        assert_eq!(render_help("tool", "Does things.", &registry), expected);
    }

    #[test]
    fn test_render_no_options_no_description() {
        let registry = OptionRegistry::new();
        let expected = "\
Usage: tool [OPTIONS] [ARGS]...

Options:
  -h, --help  Show this help message and exit
";
        assert_eq!(render_help("tool", "", &registry), expected);
    }

    #[test]
    fn test_render_hides_stolen_alias() {
        let mut registry = OptionRegistry::new();
        registry
            .declare(OptionSpec::new("alpha", OptionKind::Flag).short('a'))
            .unwrap();
        registry
            .declare(OptionSpec::new("beta", OptionKind::Flag).short('a'))
            .unwrap();

        let help = render_help("tool", "", &registry);
        assert!(help.contains("\n      --alpha\n"));
        assert!(help.contains("\n  -a, --beta\n"));
    }
}
