//! Plain-text rendering of an object graph.

use std::fmt::Write;

use crate::{AttributeValue, Controllable, ObjectRef};

/// Render `object`, its attributes, nested sources and attached bindings as
/// an indented tree.
///
/// ```text
/// audio-source
///   freq = 440
///   binding freq: direct
///     control-source = lfo
///       waveform = sine
/// ```
///
/// Two graphs built the same way render identically.
pub fn describe(object: &ObjectRef) -> String {
    let mut out = String::new();
    match object {
        ObjectRef::Object(obj) => write_object(&mut out, obj.as_ref(), 0),
        ObjectRef::Binding(obj) => write_object(&mut out, obj.as_ref(), 0),
        ObjectRef::Source(obj) => write_object(&mut out, obj.as_ref(), 0),
    }
    out
}

fn write_object<T: Controllable + ?Sized>(out: &mut String, object: &T, depth: usize) {
    let _ = writeln!(out, "{}", object.type_name());
    write_body(out, object, depth + 1);
}

fn write_body<T: Controllable + ?Sized>(out: &mut String, object: &T, depth: usize) {
    let indent = "  ".repeat(depth);
    for attribute in object.attributes() {
        match attribute.value {
            AttributeValue::Unset => {
                let _ = writeln!(out, "{indent}{} = <unset>", attribute.name);
            }
            AttributeValue::Literal(value) => {
                let _ = writeln!(out, "{indent}{} = {value}", attribute.name);
            }
            AttributeValue::Source(source) => {
                let _ = write!(out, "{indent}{} = ", attribute.name);
                write_object(out, source.as_ref(), depth);
            }
        }
    }
    for binding in object.bindings() {
        let _ = write!(out, "{indent}binding {}: ", binding.attribute());
        write_object(out, binding.as_ref(), depth);
    }
}
