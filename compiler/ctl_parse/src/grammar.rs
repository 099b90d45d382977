//! Recursive-descent rules.
//!
//! ```text
//! function             = NAME "(" ( ")" | named_parameter_list )
//! named_parameter_list = named_parameter ( "," named_parameter )* ")"
//! named_parameter      = NAME "=" ( function | value )
//! value                = NUMERIC_VALUE | STRING_VALUE
//! ```
//!
//! `named_parameter` is the only choice point: it tries `function`
//! silently, then `value` silently, and reports
//! `ExpectFunctionOrValue` only when neither began to match.

use std::fmt;

use ctl_diagnostic::ErrorCode;
use ctl_ir::{ConstructArgs, ControlNode, ObjectRef, Registry};
use ctl_lexer_core::TerminalSymbol;
use tracing::{debug, trace, trace_span, warn};

use crate::context::ParseContext;
use crate::journal::Journal;
use crate::outcome::{Mode, Reject, RuleResult};
use crate::stack::ensure_sufficient_stack;

/// Grammar productions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NonTerminal {
    Function,
    NamedParameterList,
    NamedParameter,
    Value,
}

impl NonTerminal {
    pub const ALL: [NonTerminal; 4] = [
        NonTerminal::Function,
        NonTerminal::NamedParameterList,
        NonTerminal::NamedParameter,
        NonTerminal::Value,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::Function => "function",
            NonTerminal::NamedParameterList => "named-parameter-list",
            NonTerminal::NamedParameter => "named-parameter",
            NonTerminal::Value => "value",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule evaluator for one parse.
///
/// Holds the registry to construct from and the journal of graph edits
/// made so far.
pub struct Grammar<'r> {
    registry: &'r Registry,
    journal: Journal,
}

impl<'r> Grammar<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Grammar {
            registry,
            journal: Journal::new(),
        }
    }

    /// Number of bindings attached and sources assigned so far.
    pub fn edits(&self) -> usize {
        self.journal.len()
    }

    /// Undo every edit this parse made to the object graph.
    pub fn rollback(&mut self) -> usize {
        self.journal.rollback()
    }

    /// `NAME "(" ( ")" | named_parameter_list )`
    ///
    /// Returns the cursor after the call and the constructed object.
    pub fn function(&mut self, ctx: &ParseContext<'_>, mode: Mode) -> RuleResult<(usize, ControlNode)> {
        ensure_sufficient_stack(|| self.function_inner(ctx, mode))
    }

    fn function_inner(&mut self, ctx: &ParseContext<'_>, mode: Mode) -> RuleResult<(usize, ControlNode)> {
        let _span = trace_span!("function", pos = ctx.pos()).entered();
        trace!(rule = %NonTerminal::Function, pos = ctx.pos(), ?mode);

        let name = ctx.expect(TerminalSymbol::Name, ErrorCode::ExpectFunctionName, mode)?;
        let open = ctx.at(name.end).expect(
            TerminalSymbol::OpenParen,
            ErrorCode::ExpectOpeningParen,
            mode,
        )?;

        // Committed: every failure from here on is fatal.
        let body = ctx.at(open.end);
        let node = self.construct(&body, name.value())?;
        self.attach(ctx, &node);

        let body = body.with_object(ObjectRef::from(node.clone()));
        let end = match body.matches(TerminalSymbol::CloseParen) {
            Some(close) => close.end,
            None => self.named_parameter_list(&body, Mode::Fatal)?,
        };
        Ok((end, node))
    }

    /// Look `name` up by the capability the current object calls for: a
    /// binding under construction takes a source, anything else takes a
    /// binding.
    fn construct(&self, body: &ParseContext<'_>, name: &str) -> RuleResult<ControlNode> {
        let object = body.object();
        let (args, code) = if object.is_binding() {
            (ConstructArgs::Source, ErrorCode::UnsupportedControlSource)
        } else {
            (
                ConstructArgs::Binding {
                    owner: object,
                    attribute: body.attribute(),
                },
                ErrorCode::UnsupportedControlBinding,
            )
        };

        let node = self
            .registry
            .construct(name, args)
            .ok_or_else(|| Reject::Fatal(body.error(code)))?;
        debug!(
            name,
            capability = %node.capability(),
            owner = object.type_name(),
            attribute = body.attribute(),
            "constructed"
        );
        Ok(node)
    }

    /// Attach a binding to the current object, or assign a source to the
    /// current attribute.
    fn attach(&mut self, ctx: &ParseContext<'_>, node: &ControlNode) {
        let object = ctx.object();
        match node {
            ControlNode::Binding(binding) => {
                let replaced = object.add_binding(binding.clone());
                self.journal
                    .record(object.clone(), binding.clone(), replaced);
            }
            ControlNode::Source(source) => match object.set_source(ctx.attribute(), source.clone()) {
                Ok(previous) => {
                    self.journal
                        .record_assignment(object.clone(), ctx.attribute(), previous);
                }
                Err(error) => {
                    warn!(
                        owner = object.type_name(),
                        attribute = ctx.attribute(),
                        %error,
                        "could not assign control source"
                    );
                }
            },
        }
    }

    /// `named_parameter ( "," named_parameter )* ")"`
    fn named_parameter_list(&mut self, ctx: &ParseContext<'_>, mode: Mode) -> RuleResult<usize> {
        trace!(rule = %NonTerminal::NamedParameterList, pos = ctx.pos(), ?mode);

        let mut pos = ctx.pos();
        loop {
            pos = self.named_parameter(&ctx.at(pos), mode)?;
            let here = ctx.at(pos);
            if let Some(comma) = here.matches(TerminalSymbol::Comma) {
                pos = comma.end;
            } else if let Some(close) = here.matches(TerminalSymbol::CloseParen) {
                return Ok(close.end);
            } else {
                return Err(mode.reject(here.error(ErrorCode::ExpectCommaOrClosingParen)));
            }
        }
    }

    /// `NAME "=" ( function | value )`
    fn named_parameter(&mut self, ctx: &ParseContext<'_>, mode: Mode) -> RuleResult<usize> {
        trace!(rule = %NonTerminal::NamedParameter, pos = ctx.pos(), ?mode);

        let name = ctx.expect(
            TerminalSymbol::Name,
            ErrorCode::ExpectParameterName,
            mode,
        )?;
        let assign = ctx.at(name.end).expect(
            TerminalSymbol::Assign,
            ErrorCode::ExpectAssignment,
            mode,
        )?;
        let body = ctx.at(assign.end).with_attribute(name.value());
        debug!(
            parameter = name.value(),
            object = body.object().type_name(),
            "named parameter"
        );

        match self.function(&body, Mode::Silent) {
            Ok((end, _)) => return Ok(end),
            Err(reject) if reject.is_fatal() => return Err(reject),
            Err(_) => {}
        }
        match Self::value(&body, Mode::Silent) {
            Ok(end) => Ok(end),
            Err(reject) if reject.is_fatal() => Err(reject),
            Err(_) => Err(mode.reject(body.error(ErrorCode::ExpectFunctionOrValue))),
        }
    }

    /// `NUMERIC_VALUE | STRING_VALUE`
    fn value(ctx: &ParseContext<'_>, mode: Mode) -> RuleResult<usize> {
        trace!(rule = %NonTerminal::Value, pos = ctx.pos(), ?mode);

        let token = ctx
            .matches(TerminalSymbol::NumericValue)
            .or_else(|| ctx.matches(TerminalSymbol::StringValue))
            .ok_or_else(|| mode.reject(ctx.error(ErrorCode::ExpectValue)))?;

        let object = ctx.object();
        if let Err(error) = object.set_attribute(ctx.attribute(), token.value()) {
            warn!(
                owner = object.type_name(),
                attribute = ctx.attribute(),
                literal = token.value(),
                %error,
                "could not set attribute"
            );
        }
        Ok(token.end)
    }
}
