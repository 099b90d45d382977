//! The value-typed state threaded through the grammar.

use ctl_diagnostic::ErrorCode;
use ctl_ir::ObjectRef;
use ctl_lexer_core::{match_terminal, TerminalSymbol, Token};

use crate::outcome::{Mode, Reject, SyntaxError};

/// Expression, cursor and attachment point seen by one rule.
///
/// Rules never mutate the context they are given. They derive new ones
/// with [`at`](Self::at), [`with_object`](Self::with_object) and
/// [`with_attribute`](Self::with_attribute) and hand the caller back a
/// cursor to adopt on success.
#[derive(Clone, Debug)]
pub struct ParseContext<'a> {
    source: &'a str,
    pos: usize,
    object: ObjectRef,
    attribute: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a str, object: ObjectRef, attribute: &'a str) -> Self {
        ParseContext {
            source,
            pos: 0,
            object,
            attribute,
        }
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The object new bindings attach to and attributes are set on.
    #[inline]
    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    /// The attribute the next function or value configures.
    #[inline]
    pub fn attribute(&self) -> &'a str {
        self.attribute
    }

    /// Same context, cursor moved to `pos`.
    #[must_use]
    pub fn at(&self, pos: usize) -> Self {
        debug_assert!(pos >= self.pos, "cursor must not move backwards");
        ParseContext {
            pos,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_object(&self, object: ObjectRef) -> Self {
        ParseContext {
            object,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_attribute(&self, attribute: &'a str) -> Self {
        ParseContext {
            attribute,
            ..self.clone()
        }
    }

    /// Try `symbol` at the cursor.
    #[inline]
    pub fn matches(&self, symbol: TerminalSymbol) -> Option<Token<'a>> {
        match_terminal(symbol, self.source, self.pos)
    }

    /// Require `symbol` at the cursor, failing with `code` in `mode`.
    pub fn expect(
        &self,
        symbol: TerminalSymbol,
        code: ErrorCode,
        mode: Mode,
    ) -> Result<Token<'a>, Reject> {
        self.matches(symbol)
            .ok_or_else(|| mode.reject(self.error(code)))
    }

    /// `code` at the cursor.
    #[inline]
    pub fn error(&self, code: ErrorCode) -> SyntaxError {
        SyntaxError {
            code,
            pos: self.pos,
        }
    }
}
