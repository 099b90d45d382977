#![allow(clippy::unwrap_used)]

use ctl_controller::{direct, lfo, Element};
use ctl_ir::{describe, same_binding, AttributeValue, ObjectRef};

use super::*;

#[test]
fn rollback_detaches_new_bindings() {
    let owner = Element::audio_source("src").object_ref();
    let binding = direct(&owner, "freq");
    let replaced = owner.add_binding(binding.clone());

    let mut journal = Journal::new();
    journal.record(owner.clone(), binding, replaced);
    assert_eq!(journal.len(), 1);

    assert_eq!(journal.rollback(), 1);
    assert!(owner.bindings().is_empty());
    assert_eq!(journal.len(), 0);
}

#[test]
fn rollback_restores_replaced_binding_in_place() {
    let owner = Element::audio_source("src").object_ref();
    let volume = direct(&owner, "volume");
    let original = direct(&owner, "freq");
    owner.add_binding(volume.clone());
    owner.add_binding(original.clone());

    let newer = direct(&owner, "freq");
    let replaced = owner.add_binding(newer.clone());
    let mut journal = Journal::new();
    journal.record(owner.clone(), newer, replaced);
    journal.rollback();

    let bindings = owner.bindings();
    assert_eq!(bindings.len(), 2);
    assert!(same_binding(&bindings[0], &volume));
    assert!(same_binding(&bindings[1], &original));
}

#[test]
fn rollback_is_newest_first() {
    let owner = Element::audio_source("src").object_ref();
    let first = direct(&owner, "freq");
    let mut journal = Journal::new();
    let replaced = owner.add_binding(first.clone());
    journal.record(owner.clone(), first.clone(), replaced);

    let second = direct(&owner, "freq");
    let replaced = owner.add_binding(second.clone());
    journal.record(owner.clone(), second, replaced);

    // Undoing the second restores the first, then undoing the first
    // removes it.
    assert_eq!(journal.rollback(), 2);
    assert!(owner.bindings().is_empty());
}

#[test]
fn rollback_restores_assigned_source() {
    let owner = Element::audio_source("src").object_ref();
    let binding = ObjectRef::Binding(direct(&owner, "freq"));
    let before = describe(&binding);

    let mut journal = Journal::new();
    let previous = binding.set_source("control-source", lfo()).unwrap();
    assert!(matches!(previous, AttributeValue::Unset));
    journal.record_assignment(binding.clone(), "control-source", previous);

    assert_eq!(journal.rollback(), 1);
    assert_eq!(describe(&binding), before);
    assert!(binding.assigned().is_empty());
}

#[test]
fn rollback_interleaves_attachments_and_assignments() {
    let owner = Element::audio_source("src").object_ref();
    let binding = direct(&owner, "freq");
    let mut journal = Journal::new();

    let replaced = owner.add_binding(binding.clone());
    journal.record(owner.clone(), binding.clone(), replaced);
    let slot = ObjectRef::Binding(binding);
    let previous = slot.set_source("control-source", lfo()).unwrap();
    journal.record_assignment(slot.clone(), "control-source", previous);

    assert_eq!(journal.len(), 2);
    assert_eq!(journal.rollback(), 2);
    assert!(owner.bindings().is_empty());
    assert!(slot.assigned().is_empty());
}
