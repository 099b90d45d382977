//! Declared attributes and literal coercion.
//!
//! This is the attribute setter the parser relies on: it receives the raw
//! text of a literal (`0.5`, or `sine` with the quotes already stripped)
//! and converts it to whatever type the attribute declares.

use std::fmt;
use std::mem;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Attribute, AttributeError, AttributeValue, ControlSource};

/// Declared type of an attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKind {
    Double { min: f64, max: f64 },
    Int { min: i64, max: i64 },
    UInt { min: u64, max: u64 },
    Bool,
    String,
    /// Enumeration addressed by nickname or ordinal.
    Enum(&'static [&'static str]),
    /// Holds a control source instead of a literal.
    Source,
}

impl PropertyKind {
    /// Type name used in conversion errors.
    pub fn expected(&self) -> &'static str {
        match self {
            PropertyKind::Double { .. } => "a floating-point number",
            PropertyKind::Int { .. } => "an integer",
            PropertyKind::UInt { .. } => "an unsigned integer",
            PropertyKind::Bool => "a boolean",
            PropertyKind::String => "a string",
            PropertyKind::Enum(_) => "an enumeration value",
            PropertyKind::Source => "a control source",
        }
    }
}

/// A literal attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Double(f64),
    Int(i64),
    UInt(u64),
    Bool(bool),
    String(String),
    Enum { index: usize, nick: &'static str },
}

impl Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "inspection helper; integer attributes stay far below 2^53"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::UInt(v) => Some(*v as f64),
            Value::Bool(_) | Value::String(_) | Value::Enum { .. } => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Enum { nick, .. } => Some(nick),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Double(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "'{s}'"),
            Value::Enum { nick, .. } => f.write_str(nick),
        }
    }
}

/// One declared attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: PropertyKind,
    /// Initial value; `None` for source slots.
    pub default: Option<Value>,
}

impl PropertySpec {
    pub fn double(name: &'static str, min: f64, max: f64, default: f64) -> Self {
        PropertySpec {
            name,
            kind: PropertyKind::Double { min, max },
            default: Some(Value::Double(default)),
        }
    }

    pub fn int(name: &'static str, min: i64, max: i64, default: i64) -> Self {
        PropertySpec {
            name,
            kind: PropertyKind::Int { min, max },
            default: Some(Value::Int(default)),
        }
    }

    pub fn uint(name: &'static str, min: u64, max: u64, default: u64) -> Self {
        PropertySpec {
            name,
            kind: PropertyKind::UInt { min, max },
            default: Some(Value::UInt(default)),
        }
    }

    pub fn boolean(name: &'static str, default: bool) -> Self {
        PropertySpec {
            name,
            kind: PropertyKind::Bool,
            default: Some(Value::Bool(default)),
        }
    }

    pub fn string(name: &'static str, default: &str) -> Self {
        PropertySpec {
            name,
            kind: PropertyKind::String,
            default: Some(Value::String(default.to_owned())),
        }
    }

    /// Enumeration; `default` indexes into `nicks`.
    pub fn enumeration(name: &'static str, nicks: &'static [&'static str], default: usize) -> Self {
        PropertySpec {
            name,
            kind: PropertyKind::Enum(nicks),
            default: nicks
                .get(default)
                .map(|&nick| Value::Enum { index: default, nick }),
        }
    }

    /// Object-valued attribute holding a control source.
    pub fn source(name: &'static str) -> Self {
        PropertySpec {
            name,
            kind: PropertyKind::Source,
            default: None,
        }
    }
}

/// Convert `literal` to the type declared by `spec`.
pub fn coerce(spec: &PropertySpec, literal: &str) -> Result<Value, AttributeError> {
    let text = literal.trim();
    let conversion = || AttributeError::Conversion {
        attribute: spec.name.to_owned(),
        literal: literal.to_owned(),
        expected: spec.kind.expected(),
    };
    let out_of_range = |range: String| AttributeError::OutOfRange {
        attribute: spec.name.to_owned(),
        literal: literal.to_owned(),
        range,
    };

    match &spec.kind {
        PropertyKind::Double { min, max } => {
            let value: f64 = text.parse().map_err(|_| conversion())?;
            if value.is_nan() || value < *min || value > *max {
                return Err(out_of_range(format!("{min}..={max}")));
            }
            Ok(Value::Double(value))
        }
        PropertyKind::Int { min, max } => {
            let value = parse_signed(text).ok_or_else(conversion)?;
            if value < *min || value > *max {
                return Err(out_of_range(format!("{min}..={max}")));
            }
            Ok(Value::Int(value))
        }
        PropertyKind::UInt { min, max } => {
            let value = parse_unsigned(text).ok_or_else(conversion)?;
            if value < *min || value > *max {
                return Err(out_of_range(format!("{min}..={max}")));
            }
            Ok(Value::UInt(value))
        }
        PropertyKind::Bool => parse_bool(text).map(Value::Bool).ok_or_else(conversion),
        PropertyKind::String => Ok(Value::String(literal.to_owned())),
        PropertyKind::Enum(nicks) => {
            let index = nicks
                .iter()
                .position(|nick| nick.eq_ignore_ascii_case(text))
                .or_else(|| text.parse::<usize>().ok().filter(|i| *i < nicks.len()))
                .ok_or_else(conversion)?;
            Ok(Value::Enum {
                index,
                nick: nicks[index],
            })
        }
        PropertyKind::Source => Err(AttributeError::ExpectsSource {
            attribute: spec.name.to_owned(),
        }),
    }
}

/// Largest magnitude an `f64` represents exactly as an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A decimal literal with no fractional part, e.g. `3.0` or `3.`.
///
/// The numeric terminal always carries a decimal point, so integer
/// attributes have to accept this form.
fn whole_number(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    (value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER).then_some(value)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "whole_number bounds the value to the exact integer range"
)]
fn parse_signed(text: &str) -> Option<i64> {
    text.parse()
        .ok()
        .or_else(|| whole_number(text).map(|v| v as i64))
}

/// Decimal, `0x`-prefixed hexadecimal (colors are usually written in hex)
/// or a whole decimal literal.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "whole_number bounds the value; negatives are filtered first"
)]
fn parse_unsigned(text: &str) -> Option<u64> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).ok();
    }
    text.parse().ok().or_else(|| {
        whole_number(text)
            .filter(|v| *v >= 0.0)
            .map(|v| v as u64)
    })
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "t" | "1" => Some(true),
        "false" | "no" | "f" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
struct TableState {
    values: Vec<AttributeValue>,
    /// Attribute names in the order they were explicitly assigned.
    assigned: Vec<&'static str>,
}

/// Declared attributes of one object, with their current values.
#[derive(Debug)]
pub struct PropertyTable {
    owner: &'static str,
    specs: Vec<PropertySpec>,
    state: RwLock<TableState>,
}

impl PropertyTable {
    /// Create a table for an object of type `owner`, all attributes at their
    /// defaults.
    pub fn new(owner: &'static str, specs: Vec<PropertySpec>) -> Self {
        let values = specs
            .iter()
            .map(|spec| {
                spec.default
                    .clone()
                    .map_or(AttributeValue::Unset, AttributeValue::Literal)
            })
            .collect();
        PropertyTable {
            owner,
            specs,
            state: RwLock::new(TableState {
                values,
                assigned: Vec::new(),
            }),
        }
    }

    pub fn specs(&self) -> &[PropertySpec] {
        &self.specs
    }

    fn index_of(&self, attribute: &str) -> Result<usize, AttributeError> {
        self.specs
            .iter()
            .position(|spec| spec.name == attribute)
            .ok_or_else(|| AttributeError::Unknown {
                type_name: self.owner.to_owned(),
                attribute: attribute.to_owned(),
            })
    }

    /// Coerce and assign a literal.
    pub fn set_literal(&self, attribute: &str, literal: &str) -> Result<(), AttributeError> {
        let index = self.index_of(attribute)?;
        let spec = &self.specs[index];
        let value = coerce(spec, literal)?;
        let mut state = self.state.write();
        state.values[index] = AttributeValue::Literal(value);
        state.assigned.push(spec.name);
        Ok(())
    }

    /// Assign a control source to an object-valued attribute. Returns the
    /// value it displaced.
    pub fn set_source(
        &self,
        attribute: &str,
        source: Arc<dyn ControlSource>,
    ) -> Result<AttributeValue, AttributeError> {
        let index = self.index_of(attribute)?;
        let spec = &self.specs[index];
        if !matches!(spec.kind, PropertyKind::Source) {
            return Err(AttributeError::NotASource {
                attribute: spec.name.to_owned(),
            });
        }
        let mut state = self.state.write();
        state.assigned.push(spec.name);
        Ok(mem::replace(
            &mut state.values[index],
            AttributeValue::Source(source),
        ))
    }

    /// Put back a value displaced by an assignment and drop the latest
    /// assignment record for `attribute`.
    pub fn restore(&self, attribute: &str, previous: AttributeValue) -> Result<(), AttributeError> {
        let index = self.index_of(attribute)?;
        let name = self.specs[index].name;
        let mut state = self.state.write();
        state.values[index] = previous;
        if let Some(at) = state.assigned.iter().rposition(|&n| n == name) {
            state.assigned.remove(at);
        }
        Ok(())
    }

    /// Current value of `attribute`.
    pub fn get(&self, attribute: &str) -> Option<AttributeValue> {
        let index = self.index_of(attribute).ok()?;
        Some(self.state.read().values[index].clone())
    }

    /// Current literal value of `attribute`, if it holds one.
    pub fn literal(&self, attribute: &str) -> Option<Value> {
        match self.get(attribute)? {
            AttributeValue::Literal(value) => Some(value),
            AttributeValue::Unset | AttributeValue::Source(_) => None,
        }
    }

    /// Names of explicitly assigned attributes, in assignment order.
    pub fn assigned(&self) -> Vec<&'static str> {
        self.state.read().assigned.clone()
    }

    /// All attributes with their current values, in declaration order.
    pub fn snapshot(&self) -> Vec<Attribute> {
        let state = self.state.read();
        self.specs
            .iter()
            .zip(state.values.iter())
            .map(|(spec, value)| Attribute {
                name: spec.name,
                value: value.clone(),
            })
            .collect()
    }
}
