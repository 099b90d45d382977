//! Terminal symbol definitions.

use std::fmt;

/// Lexical categories of the controller expression language.
///
/// Each category is bound to exactly one pattern. Patterns are anchored at
/// the cursor and swallow whitespace (newlines included) on both sides of
/// the token, so the grammar never has to skip blanks itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TerminalSymbol {
    /// Function or parameter name: lowercase letter, then `[a-z0-9_-]`.
    Name,
    /// Decimal literal. The decimal point is mandatory (`0.5`, `.5`, `50.`).
    NumericValue,
    /// Single-quoted string literal. The quotes are not part of the value.
    StringValue,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `=`
    Assign,
}

impl TerminalSymbol {
    /// Number of terminal symbols.
    pub const COUNT: usize = 7;

    /// All terminal symbols, in pattern-table order.
    pub const ALL: [TerminalSymbol; Self::COUNT] = [
        TerminalSymbol::Name,
        TerminalSymbol::NumericValue,
        TerminalSymbol::StringValue,
        TerminalSymbol::OpenParen,
        TerminalSymbol::CloseParen,
        TerminalSymbol::Comma,
        TerminalSymbol::Assign,
    ];

    /// The fixed pattern for this symbol.
    ///
    /// Group 1, where present, is the token's semantic value.
    pub const fn pattern(self) -> &'static str {
        match self {
            TerminalSymbol::Name => r"^\s*([a-z][a-z0-9_-]*)\s*",
            TerminalSymbol::NumericValue => r"^\s*([0-9]*\.[0-9]*)\s*",
            TerminalSymbol::StringValue => r"^\s*'(.*?)'\s*",
            TerminalSymbol::OpenParen => r"^\s*\(\s*",
            TerminalSymbol::CloseParen => r"^\s*\)\s*",
            TerminalSymbol::Comma => r"^\s*,\s*",
            TerminalSymbol::Assign => r"^\s*=\s*",
        }
    }

    /// Whether a match of this symbol carries a captured value.
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            TerminalSymbol::Name | TerminalSymbol::NumericValue | TerminalSymbol::StringValue
        )
    }

    /// Short name used in trace output.
    pub const fn display_name(self) -> &'static str {
        match self {
            TerminalSymbol::Name => "<name>",
            TerminalSymbol::NumericValue => "<number>",
            TerminalSymbol::StringValue => "<string>",
            TerminalSymbol::OpenParen => "(",
            TerminalSymbol::CloseParen => ")",
            TerminalSymbol::Comma => ",",
            TerminalSymbol::Assign => "=",
        }
    }

    /// Index into the compiled pattern table.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TerminalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
