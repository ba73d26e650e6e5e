//! optdecl CLI
//!
//! Front end for a chat / commit-message tool whose command line is parsed
//! by the `optdecl` engine. It resolves the invocation and reports it; it
//! does not talk to any model.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- gen "Explain borrowing"
//! cargo run -- -m claude-3-haiku-20240307 -t 500 gen "Explain borrowing"
//! cargo run -- --diff changes.patch --json commit
//! cargo run -- --help
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success, or help was printed
//! - 1: Error (unknown option, invalid value, missing command, etc.)

use optdecl::cli::{self, Invocation};
use std::process;

fn main() {
    cli::init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (args, session) = match cli::parse_args(&argv) {
        Ok(Invocation::Help(text)) => {
            print!("{}", text);
            return;
        }
        Ok(Invocation::Run { args, session }) => (args, session),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try '{} --help' for more information.", cli::PROGRAM);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout();
    if let Err(e) = cli::write_report(&args, &session, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
