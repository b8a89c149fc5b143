//! # Masterblog CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns errors into an exit status.
//!
//! ```text
//! cli/setup.rs     clap argument definitions
//! cli/commands.rs  context wiring + dispatch to BlogApi
//! cli/print.rs     terminal rendering (tables, JSON, messages)
//! ```
//!
//! Every error is printed once, to stderr, prefixed with its stable kind code
//! (`not_found`, `empty_field`, ...), and the process exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error [{}]: {}", e.kind(), e);
        std::process::exit(1);
    }
}
