//! Target elements.

use std::sync::Arc;

use ctl_ir::{ObjectCore, ObjectRef, PropertySpec};

/// A pipeline element whose attributes can be driven by bindings.
#[derive(Debug)]
pub struct Element {
    name: String,
    core: ObjectCore,
}

ctl_ir::impl_controllable!(Element, core);

/// Audio test source waveforms.
const AUDIO_WAVES: &[&str] = &[
    "sine",
    "square",
    "saw",
    "triangle",
    "silence",
    "white-noise",
    "pink-noise",
    "sine-table",
    "ticks",
    "gaussian-noise",
    "red-noise",
    "blue-noise",
    "violet-noise",
];

/// Video test source patterns.
const VIDEO_PATTERNS: &[&str] = &[
    "smpte",
    "snow",
    "black",
    "white",
    "red",
    "green",
    "blue",
    "checkers-1",
    "checkers-2",
    "checkers-4",
    "checkers-8",
    "circular",
    "blink",
    "smpte75",
    "zone-plate",
    "gamut",
    "chroma-zone-plate",
    "solid-color",
    "ball",
    "smpte100",
    "bar",
    "pinwheel",
    "spokes",
    "gradient",
    "colors",
];

impl Element {
    /// An `audio-source` with `freq`, `volume` and `wave`.
    pub fn audio_source(name: &str) -> Arc<Self> {
        Self::build(
            name,
            "audio-source",
            vec![
                PropertySpec::double("freq", 0.0, 20_000.0, 440.0),
                PropertySpec::double("volume", 0.0, 10.0, 0.8),
                PropertySpec::enumeration("wave", AUDIO_WAVES, 0),
            ],
        )
    }

    /// A `video-source` with `foreground-color` (ARGB) and `pattern`.
    pub fn video_source(name: &str) -> Arc<Self> {
        Self::build(
            name,
            "video-source",
            vec![
                PropertySpec::uint("foreground-color", 0, u64::from(u32::MAX), 0xffff_ffff),
                PropertySpec::enumeration("pattern", VIDEO_PATTERNS, 0),
            ],
        )
    }

    fn build(name: &str, type_name: &'static str, specs: Vec<PropertySpec>) -> Arc<Self> {
        Arc::new(Element {
            name: name.to_owned(),
            core: ObjectCore::new(type_name, specs),
        })
    }

    /// Instance name, e.g. `src`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attachment point for a parse.
    pub fn object_ref(self: &Arc<Self>) -> ObjectRef {
        ObjectRef::object(self.clone())
    }
}

#[cfg(test)]
mod tests;
