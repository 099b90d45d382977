//! Anchored terminal matching over a borrowed expression.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::TerminalSymbol;

/// Compiled terminal patterns, indexed by `TerminalSymbol::index`.
///
/// Compiled on first use, never freed.
static PATTERNS: OnceLock<[Regex; TerminalSymbol::COUNT]> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "patterns are compile-time constants exercised by the test suite"
)]
fn compile() -> [Regex; TerminalSymbol::COUNT] {
    TerminalSymbol::ALL
        .map(|symbol| Regex::new(symbol.pattern()).expect("terminal pattern must compile"))
}

#[inline]
fn patterns() -> &'static [Regex; TerminalSymbol::COUNT] {
    PATTERNS.get_or_init(compile)
}

/// Compile the terminal patterns now instead of on first match.
///
/// Safe to call any number of times; only the first call does work.
pub fn init() {
    let _ = patterns();
}

/// Whether the pattern table has been compiled yet.
pub fn is_initialized() -> bool {
    PATTERNS.get().is_some()
}

/// A matched terminal.
///
/// `end` is the cursor the caller should adopt: it lies past the token and
/// any whitespace that follows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub symbol: TerminalSymbol,
    /// Cursor the match started at (before leading whitespace).
    pub start: usize,
    /// Cursor after the match (after trailing whitespace).
    pub end: usize,
    /// Captured value; `None` for punctuation.
    pub text: Option<&'src str>,
}

impl<'src> Token<'src> {
    /// The captured value, or the empty string for punctuation.
    #[inline]
    pub fn value(&self) -> &'src str {
        self.text.unwrap_or_default()
    }
}

/// Try to match `symbol` at byte offset `pos` of `source`.
///
/// The match is anchored: text further along is never considered. Returns
/// `None` when the symbol does not match, when `pos` lies past the end, or
/// when `pos` is not on a character boundary.
pub fn match_terminal(symbol: TerminalSymbol, source: &str, pos: usize) -> Option<Token<'_>> {
    let rest = source.get(pos..)?;
    let captures = patterns()[symbol.index()].captures(rest)?;
    let whole = captures.get(0)?;
    let text = captures
        .get(1)
        .filter(|_| symbol.has_value())
        .map(|m| m.as_str());

    trace!(
        symbol = %symbol,
        start = pos,
        end = pos + whole.end(),
        value = text.unwrap_or_default(),
        "matched terminal"
    );

    Some(Token {
        symbol,
        start: pos,
        end: pos + whole.end(),
        text,
    })
}
