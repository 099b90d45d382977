//! Positional syntax diagnostics.

use std::fmt;

use crate::ErrorCode;

/// A syntax error at a byte position of an expression.
///
/// Renders as three lines: the message, the expression flattened onto one
/// line, and a caret under the failure position.
///
/// ```text
/// Syntax error: unsupported control-binding at pos: 5
///   argb(control-source-b=lfo())
///        ^
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    position: usize,
    source: String,
}

impl Diagnostic {
    /// Create a diagnostic for `code` at byte `position` of `source`.
    pub fn new(code: ErrorCode, position: usize, source: &str) -> Self {
        Diagnostic {
            code: Some(code),
            position,
            source: source.to_owned(),
        }
    }

    /// Create a diagnostic from a raw error number.
    ///
    /// Unknown numbers (including 0) render with an empty description.
    pub fn from_number(number: u32, position: usize, source: &str) -> Self {
        Diagnostic {
            code: ErrorCode::from_number(number),
            position,
            source: source.to_owned(),
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Byte offset the parser stopped at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The expression that failed to parse.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        self.code.map_or("", ErrorCode::description)
    }

    /// Render the full three-line message.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one_line = self.source.replace('\n', " ");
        write!(
            f,
            "Syntax error: {} at pos: {}\n  {}\n   {:>width$}",
            self.description(),
            self.position,
            one_line,
            "^",
            width = self.position
        )
    }
}
