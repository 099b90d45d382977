//! Parse errors returned by the facade.

use ctl_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// Why a controller expression could not be attached.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ControlParseError {
    /// The expression is malformed or names an unknown factory.
    #[error("{0}")]
    Syntax(Diagnostic),

    /// The call itself was unusable (e.g. an empty attribute name).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl ControlParseError {
    /// The syntax error kind, if this is a syntax error.
    pub fn code(&self) -> Option<ErrorCode> {
        self.diagnostic().and_then(Diagnostic::code)
    }

    /// Byte position of a syntax error.
    pub fn position(&self) -> Option<usize> {
        self.diagnostic().map(Diagnostic::position)
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ControlParseError::Syntax(diagnostic) => Some(diagnostic),
            ControlParseError::InvalidArgument(_) => None,
        }
    }
}
