//! Parser tests.
//!
//! - `scenarios`: complete expressions from the demonstration setups
//! - `errors`: error kinds and positions
//! - `rollback`: target state after rejected expressions
//! - `concurrency`: independent parses sharing one registry
//! - `properties`: property-based checks over generated input

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod concurrency;
mod errors;

use std::sync::Arc;

use ctl_controller::{default_registry, Element};
use ctl_ir::{ControlBinding, ControlNode, ControlSource, ObjectRef};

use crate::{parse_control_expression, ControlParseError, ErrorCode};

/// Parse against a fresh `audio-source`, attribute `freq`.
fn parse_audio(expression: &str) -> (ObjectRef, Result<ControlNode, ControlParseError>) {
    let target = Element::audio_source("src").object_ref();
    let result = parse_control_expression(&default_registry(), expression, &target, "freq");
    (target, result)
}

/// Error kind and position of a failed parse.
fn failure(expression: &str) -> (ErrorCode, usize) {
    let (_, result) = parse_audio(expression);
    let error = result.expect_err("expression should be rejected");
    (error.code().unwrap(), error.position().unwrap())
}

/// The source assigned to `slot` of `binding`.
fn source_in(binding: &Arc<dyn ControlBinding>, slot: &str) -> Arc<dyn ControlSource> {
    binding
        .attributes()
        .into_iter()
        .find(|a| a.name == slot)
        .and_then(|a| a.source().cloned())
        .unwrap_or_else(|| panic!("no source in {slot}"))
}
