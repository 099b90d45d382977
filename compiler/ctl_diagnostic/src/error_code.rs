//! Error codes for controller expression syntax errors.
//!
//! The set is flat and closed: every failed parse reports exactly one of
//! these. Codes carry a stable number (1..=9), a string form (`C0001`) for
//! searchability, and a kebab-case name for the command line.

use std::fmt;

/// Syntax error kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// A function call did not start with a name.
    ExpectFunctionName = 1,
    /// A function name was not followed by `(`.
    ExpectOpeningParen,
    /// A parameter was followed by something other than `,` or `)`.
    ExpectCommaOrClosingParen,
    /// A parameter did not start with a name.
    ExpectParameterName,
    /// A parameter name was not followed by `=`.
    ExpectAssignment,
    /// Neither a number nor a string literal.
    ExpectValue,
    /// A parameter body is neither a function call nor a literal.
    ExpectFunctionOrValue,
    /// No source factory registered under the called name.
    UnsupportedControlSource,
    /// No binding factory registered under the called name.
    UnsupportedControlBinding,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::ExpectFunctionName,
        ErrorCode::ExpectOpeningParen,
        ErrorCode::ExpectCommaOrClosingParen,
        ErrorCode::ExpectParameterName,
        ErrorCode::ExpectAssignment,
        ErrorCode::ExpectValue,
        ErrorCode::ExpectFunctionOrValue,
        ErrorCode::UnsupportedControlSource,
        ErrorCode::UnsupportedControlBinding,
    ];

    /// Stable numeric value (1..=9).
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Look up a code by its number.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.number() == number)
    }

    /// Code string (e.g. `"C0008"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ExpectFunctionName => "C0001",
            ErrorCode::ExpectOpeningParen => "C0002",
            ErrorCode::ExpectCommaOrClosingParen => "C0003",
            ErrorCode::ExpectParameterName => "C0004",
            ErrorCode::ExpectAssignment => "C0005",
            ErrorCode::ExpectValue => "C0006",
            ErrorCode::ExpectFunctionOrValue => "C0007",
            ErrorCode::UnsupportedControlSource => "C0008",
            ErrorCode::UnsupportedControlBinding => "C0009",
        }
    }

    /// Kebab-case name (e.g. `"unsupported-control-source"`).
    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::ExpectFunctionName => "expect-function-name",
            ErrorCode::ExpectOpeningParen => "expect-opening-paren",
            ErrorCode::ExpectCommaOrClosingParen => "expect-comma-or-closing-paren",
            ErrorCode::ExpectParameterName => "expect-parameter-name",
            ErrorCode::ExpectAssignment => "expect-assignment",
            ErrorCode::ExpectValue => "expect-value",
            ErrorCode::ExpectFunctionOrValue => "expect-function-or-value",
            ErrorCode::UnsupportedControlSource => "unsupported-control-source",
            ErrorCode::UnsupportedControlBinding => "unsupported-control-binding",
        }
    }

    /// Short English phrase used in the rendered diagnostic.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::ExpectFunctionName => "expect <name> for function",
            ErrorCode::ExpectOpeningParen => "expect <(>",
            ErrorCode::ExpectCommaOrClosingParen => "expect <,> or <)>",
            ErrorCode::ExpectParameterName => "expect <name> for parameter",
            ErrorCode::ExpectAssignment => "expect <=>",
            ErrorCode::ExpectValue => "expect <value>",
            ErrorCode::ExpectFunctionOrValue => "expect <function> or <value> for parameter",
            ErrorCode::UnsupportedControlSource => "unsupported control-source",
            ErrorCode::UnsupportedControlBinding => "unsupported control-binding",
        }
    }

    /// Description for a raw error number; empty for 0 and unknown numbers.
    pub fn describe(number: u32) -> &'static str {
        Self::from_number(number).map_or("", Self::description)
    }

    /// Whether the error names a function the registry does not know.
    pub fn is_unsupported_factory(self) -> bool {
        matches!(
            self,
            ErrorCode::UnsupportedControlSource | ErrorCode::UnsupportedControlBinding
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code from its code string (`"C0003"`), its number
/// (`"3"`) or its name (`"expect-comma-or-closing-paren"`).
///
/// Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number).ok_or(());
        }
        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .iter()
            .find(|code| code.name() == lower || code.as_str().eq_ignore_ascii_case(&lower))
            .copied()
            .ok_or(())
    }
}
