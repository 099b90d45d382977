//! Low-level terminal matching for controller expressions.
//!
//! A controller expression is a nested function call with named parameters:
//!
//! ```text
//! direct(control-source=lfo(waveform='sine',frequency=0.5))
//! ```
//!
//! This crate knows nothing about functions or parameters. It matches one
//! terminal symbol at a time, anchored at a byte cursor, and hands back the
//! cursor the caller should adopt. The grammar engine decides what to do
//! with a missing match; for this crate a missing match is an ordinary
//! outcome, not an error.
//!
//! # Pattern cache
//!
//! Every terminal is backed by one fixed regular expression. The seven
//! expressions are compiled on first use into a process-wide table and live
//! for the rest of the process. [`init`] forces compilation up front.

mod scanner;
mod terminal;

pub use scanner::{init, is_initialized, match_terminal, Token};
pub use terminal::TerminalSymbol;
