//! Control sources.

use std::fmt;

use ctl_ir::{ControlSource, ObjectCore, PropertySpec, Value};
use tracing::debug;

/// LFO waveform shapes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    ReverseSaw,
    Triangle,
}

impl Waveform {
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Saw,
        Waveform::ReverseSaw,
        Waveform::Triangle,
    ];

    /// Nicknames in declaration order, as accepted in expressions.
    const NICKS: &'static [&'static str] = &["sine", "square", "saw", "reverse-saw", "triangle"];

    pub fn nick(self) -> &'static str {
        Self::NICKS[self as usize]
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick())
    }
}

/// Low-frequency oscillator configuration.
#[derive(Debug)]
pub struct LfoControlSource {
    core: ObjectCore,
}

ctl_ir::impl_controllable!(LfoControlSource, core);

impl ControlSource for LfoControlSource {}

impl Default for LfoControlSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LfoControlSource {
    pub fn new() -> Self {
        debug!("constructing lfo control-source");
        LfoControlSource {
            core: ObjectCore::new(
                "lfo",
                vec![
                    PropertySpec::enumeration("waveform", Waveform::NICKS, 0),
                    PropertySpec::double("frequency", 0.0, f64::MAX, 1.0),
                    PropertySpec::uint("timeshift", 0, u64::MAX, 0),
                    PropertySpec::double("amplitude", 0.0, 1.0, 1.0),
                    PropertySpec::double("offset", 0.0, 1.0, 1.0),
                ],
            ),
        }
    }

    pub fn waveform(&self) -> Waveform {
        match self.core.properties().literal("waveform") {
            Some(Value::Enum { index, .. }) => Waveform::from_index(index).unwrap_or(Waveform::Sine),
            _ => Waveform::Sine,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.double("frequency")
    }

    pub fn amplitude(&self) -> f64 {
        self.double("amplitude")
    }

    pub fn offset(&self) -> f64 {
        self.double("offset")
    }

    fn double(&self, attribute: &str) -> f64 {
        self.core
            .properties()
            .literal(attribute)
            .and_then(|value| value.as_f64())
            .unwrap_or_default()
    }
}
