use ctl_ir::{Controllable, Value};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn audio_source_defaults() {
    let element = Element::audio_source("src");
    assert_eq!(element.name(), "src");
    assert_eq!(element.type_name(), "audio-source");
    let names: Vec<_> = element.attributes().into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["freq", "volume", "wave"]);
    assert!(element.assigned().is_empty());
}

#[test]
fn audio_source_accepts_literals() {
    let element = Element::audio_source("src");
    assert_eq!(element.set_attribute("freq", "880.0"), Ok(()));
    assert_eq!(element.set_attribute("wave", "triangle"), Ok(()));
    assert!(element.set_attribute("freq", "30000.0").is_err());
    assert_eq!(element.assigned(), vec!["freq", "wave"]);
}

#[test]
fn video_pattern_by_ordinal() {
    let element = Element::video_source("src");
    assert_eq!(element.set_attribute("pattern", "17"), Ok(()));
    let pattern = element
        .object_ref()
        .attribute("pattern")
        .and_then(|a| a.literal().cloned());
    assert_eq!(
        pattern,
        Some(Value::Enum {
            index: 17,
            nick: "solid-color"
        })
    );
}

#[test]
fn video_color_accepts_hex() {
    let element = Element::video_source("src");
    assert_eq!(element.set_attribute("foreground-color", "0xff00ff00"), Ok(()));
    assert!(element.set_attribute("foreground-color", "0x1ffffffff").is_err());
}
