//! Controller expression parser.
//!
//! Parses `name(param=value, ...)` expressions and attaches the objects
//! they describe to an attribute of a caller-owned target:
//!
//! ```text
//! direct(control-source=lfo(waveform='sine',frequency=0.5))
//! ```
//!
//! attaches a `direct` binding for the attribute to the target and gives
//! it a freshly constructed `lfo` source.
//!
//! # Pipeline
//!
//! ```text
//! expression ─► Grammar (rules) ─► Registry (construct) ─► target graph
//!                  │
//!                  └─► ctl_lexer_core (terminals)
//! ```
//!
//! Failures are reported as a [`Diagnostic`] with a caret under the
//! failing position. Bindings attached and sources assigned before a
//! failure are undone again, so a rejected expression leaves the target as
//! it was.
//!
//! The registry is read-only during parsing. Independent parses may run
//! on several threads against one registry.

mod context;
mod error;
mod grammar;
mod journal;
mod outcome;
mod stack;

use ctl_ir::{ControlNode, ObjectRef, Registry};
use tracing::{info, warn};

pub use context::ParseContext;
pub use ctl_diagnostic::{Diagnostic, ErrorCode};
pub use error::ControlParseError;
pub use grammar::{Grammar, NonTerminal};
pub use outcome::{Mode, Reject, RuleResult, SyntaxError};

/// Compile the terminal patterns. Idempotent; parsing compiles them on
/// first use anyway.
pub fn init() {
    ctl_lexer_core::init();
}

/// Parses controller expressions against a registry of factories.
#[derive(Copy, Clone, Debug)]
pub struct ControlParser<'r> {
    registry: &'r Registry,
}

impl<'r> ControlParser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        ControlParser { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Parse `expression` and attach the result to `attribute` of `object`.
    ///
    /// On success, returns the top-level constructed object: a binding now
    /// in `object`'s binding list, or a source assigned to `attribute`.
    ///
    /// # Errors
    ///
    /// - [`ControlParseError::InvalidArgument`] if `attribute` is empty.
    /// - [`ControlParseError::Syntax`] with the first committed failure.
    ///   Bindings attached and sources assigned before it are undone.
    pub fn parse(
        &self,
        expression: &str,
        object: &ObjectRef,
        attribute: &str,
    ) -> Result<ControlNode, ControlParseError> {
        if attribute.is_empty() {
            return Err(ControlParseError::InvalidArgument(
                "attribute name must not be empty",
            ));
        }
        init();
        info!(
            expression,
            target = object.type_name(),
            attribute,
            "parsing control expression"
        );

        let mut grammar = Grammar::new(self.registry);
        let ctx = ParseContext::new(expression, object.clone(), attribute);
        match grammar.function(&ctx, Mode::Fatal) {
            Ok((end, node)) => {
                info!(
                    end,
                    top = node.type_name(),
                    edits = grammar.edits(),
                    "control expression attached"
                );
                Ok(node)
            }
            Err(reject) => {
                let error = reject.error();
                let rolled_back = grammar.rollback();
                warn!(
                    code = %error.code,
                    pos = error.pos,
                    rolled_back,
                    "control expression rejected"
                );
                Err(ControlParseError::Syntax(Diagnostic::new(
                    error.code,
                    error.pos,
                    expression,
                )))
            }
        }
    }
}

/// Parse `expression` against `registry` and attach it to `attribute` of
/// `object`. See [`ControlParser::parse`].
pub fn parse_control_expression(
    registry: &Registry,
    expression: &str,
    object: &ObjectRef,
    attribute: &str,
) -> Result<ControlNode, ControlParseError> {
    ControlParser::new(registry).parse(expression, object, attribute)
}

#[cfg(test)]
mod tests;
