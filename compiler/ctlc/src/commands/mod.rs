//! Command handlers for the `ctl` CLI.
//!
//! Every handler returns `Ok(stdout)` or `Err(stderr)`; `main` prints the
//! text and picks the exit code.

mod demo;
mod explain;
mod factories;
mod parse;

pub use demo::{run_demo, Setup, SETUPS};
pub use explain::explain_error;
pub use factories::list_factories;
pub use parse::{parse_options, run_parse, ElementKind, ParseOptions};

/// Output of a command: stdout text on success, stderr text on failure.
pub type CommandResult = Result<String, String>;
