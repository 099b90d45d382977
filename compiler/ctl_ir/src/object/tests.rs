#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::test_fixtures::{binding, source, Target};
use crate::{AttributeValue, Capability, ControlNode, ObjectRef, Value};

#[test]
fn plain_target_has_no_capability() {
    let target = Target::new().object_ref();
    assert_eq!(target.capability(), None);
    assert!(!target.is_binding());
    assert_eq!(target.type_name(), "target");
}

#[test]
fn node_conversion_keeps_capability() {
    let node = ControlNode::Binding(binding("level"));
    assert_eq!(node.capability(), Capability::Binding);
    let object = ObjectRef::from(node);
    assert!(object.is_binding());
    assert_eq!(object.capability(), Some(Capability::Binding));

    let node = ControlNode::Source(source());
    assert_eq!(node.capability(), Capability::Source);
    assert!(node.as_binding().is_none());
    assert_eq!(node.as_source().map(|s| s.type_name()), Some("source"));
    assert_eq!(
        ObjectRef::from(node).capability(),
        Some(Capability::Source)
    );
}

#[test]
fn set_attribute_delegates_to_object() {
    let target = Target::new().object_ref();
    assert_eq!(target.set_attribute("level", "0.25"), Ok(()));
    let level = target.attribute("level").and_then(|a| a.literal().cloned());
    assert_eq!(level, Some(Value::Double(0.25)));
}

#[test]
fn set_source_through_binding_ref() {
    let binding_ref = ObjectRef::Binding(binding("level"));
    let src = source();
    let previous = binding_ref.set_source("control-source", src.clone());
    assert!(matches!(previous, Ok(AttributeValue::Unset)));
    let attribute = binding_ref.attribute("control-source");
    let assigned = attribute.as_ref().and_then(|a| a.source());
    assert!(assigned.is_some_and(|s| Arc::ptr_eq(s, &src)));
}

#[test]
fn restore_attribute_undoes_set_source() {
    let binding_ref = ObjectRef::Binding(binding("level"));
    let first = source();
    assert!(binding_ref.set_source("control-source", first.clone()).is_ok());
    let previous = binding_ref
        .set_source("control-source", source())
        .unwrap();
    assert!(matches!(&previous, AttributeValue::Source(s) if Arc::ptr_eq(s, &first)));

    assert_eq!(binding_ref.restore_attribute("control-source", previous), Ok(()));
    let attribute = binding_ref.attribute("control-source");
    let restored = attribute.as_ref().and_then(|a| a.source());
    assert!(restored.is_some_and(|s| Arc::ptr_eq(s, &first)));
    assert_eq!(binding_ref.assigned(), vec!["control-source"]);
}

#[test]
fn add_and_remove_bindings() {
    let target = Target::new().object_ref();
    let first = binding("level");
    assert!(target.add_binding(first.clone()).is_none());
    assert_eq!(target.bindings().len(), 1);
    assert!(target.remove_binding(&first));
    assert!(target.bindings().is_empty());
    assert!(!target.remove_binding(&first));
}

#[test]
fn binding_for_same_attribute_is_replaced() {
    let target = Target::new().object_ref();
    let first = binding("level");
    let second = binding("level");
    target.add_binding(first.clone());
    let replaced = target.add_binding(second.clone());
    assert!(replaced.is_some_and(|b| crate::same_binding(&b, &first)));
    let bindings = target.bindings();
    assert_eq!(bindings.len(), 1);
    assert!(crate::same_binding(&bindings[0], &second));
}

#[test]
fn ptr_eq_compares_identity() {
    let target = Target::new();
    let a = target.object_ref();
    let b = target.object_ref();
    let other = Target::new().object_ref();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&other));
}

#[test]
fn unset_source_slot_reports_unset() {
    let binding_ref = ObjectRef::Binding(binding("level"));
    let attribute = binding_ref.attribute("control-source");
    assert!(matches!(
        attribute.map(|a| a.value),
        Some(AttributeValue::Unset)
    ));
}

#[test]
fn assigned_tracks_order_through_ref() {
    let target = Target::new().object_ref();
    assert_eq!(target.set_attribute("label", "x"), Ok(()));
    assert_eq!(target.set_attribute("level", "1.0"), Ok(()));
    assert_eq!(target.assigned(), vec!["label", "level"]);
}
