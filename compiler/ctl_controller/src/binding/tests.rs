use std::sync::Arc;

use ctl_ir::{AttributeError, AttributeValue, Controllable, Value};
use pretty_assertions::assert_eq;

use super::*;
use crate::lfo;

#[test]
fn direct_records_owner_and_attribute() {
    let binding = DirectControlBinding::new("audio-source", "freq");
    assert_eq!(binding.owner(), "audio-source");
    assert_eq!(binding.attribute(), "freq");
    assert_eq!(binding.type_name(), "direct");
    assert_eq!(absolute(&binding), Some(Value::Bool(false)));
}

fn absolute(binding: &DirectControlBinding) -> Option<Value> {
    binding
        .attributes()
        .into_iter()
        .find(|a| a.name == "absolute")
        .and_then(|a| a.literal().cloned())
}

#[test]
fn direct_absolute_flag() {
    let binding = DirectControlBinding::new("audio-source", "freq");
    assert_eq!(binding.set_attribute("absolute", "1"), Ok(()));
    assert_eq!(absolute(&binding), Some(Value::Bool(true)));
}

#[test]
fn direct_takes_source_in_slot() {
    let binding = DirectControlBinding::new("audio-source", "freq");
    let source = lfo();
    assert!(matches!(
        binding.set_source("control-source", source.clone()),
        Ok(AttributeValue::Unset)
    ));
    let attached = binding
        .attributes()
        .into_iter()
        .find(|a| a.name == "control-source")
        .and_then(|a| a.source().cloned());
    assert!(attached.is_some_and(|s| Arc::ptr_eq(&s, &source)));
}

#[test]
fn direct_rejects_literal_for_source_slot() {
    let binding = DirectControlBinding::new("audio-source", "freq");
    assert_eq!(
        binding.set_attribute("control-source", "0.5"),
        Err(AttributeError::ExpectsSource {
            attribute: "control-source".to_owned()
        })
    );
}

#[test]
fn argb_channels() {
    let binding = ArgbControlBinding::new("video-source", "foreground-color");
    assert_eq!(binding.owner(), "video-source");
    assert!(binding.assigned().is_empty());
    assert!(binding.set_source("control-source-g", lfo()).is_ok());
    assert!(binding.set_source("control-source-b", lfo()).is_ok());
    let bound: Vec<_> = binding
        .attributes()
        .into_iter()
        .filter(|a| a.source().is_some())
        .map(|a| a.name)
        .collect();
    assert_eq!(bound, vec!["control-source-g", "control-source-b"]);
    assert!(binding.set_source("control-source-x", lfo()).is_err());
}
