//! Rule results and failure propagation.
//!
//! | Mode | Failure before commit | Failure after commit |
//! |------|-----------------------|----------------------|
//! | `Fatal` | `Reject::Fatal` | `Reject::Fatal` |
//! | `Silent` | `Reject::Backtrack` | `Reject::Fatal` |
//!
//! A function call is committed once its name and `(` matched. A
//! `Backtrack` reject leaves nothing behind: the caller keeps its own
//! context and tries the next alternative.

use std::fmt;

use ctl_diagnostic::ErrorCode;

/// How the caller wants pre-commit failures reported.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mode {
    /// Report failures to the caller.
    Fatal,
    /// Discard failures so the caller can try an alternative.
    Silent,
}

impl Mode {
    /// Wrap a pre-commit failure according to this mode.
    #[inline]
    pub fn reject(self, error: SyntaxError) -> Reject {
        match self {
            Mode::Fatal => Reject::Fatal(error),
            Mode::Silent => Reject::Backtrack(error),
        }
    }
}

/// A syntax error kind at a byte position.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SyntaxError {
    pub code: ErrorCode,
    pub pos: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.code, self.pos)
    }
}

/// Why a rule did not succeed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Reject {
    /// Nothing was committed; try the next alternative.
    Backtrack(SyntaxError),
    /// A committed path failed; the whole parse fails with this error.
    Fatal(SyntaxError),
}

impl Reject {
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Reject::Fatal(_))
    }

    pub fn error(&self) -> SyntaxError {
        match self {
            Reject::Backtrack(error) | Reject::Fatal(error) => *error,
        }
    }
}

/// Result of a grammar rule.
pub type RuleResult<T> = Result<T, Reject>;
