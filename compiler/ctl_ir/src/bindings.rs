//! Per-object list of attached control bindings.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::{same_binding, ControlBinding};

/// Bindings attached to one object, at most one per attribute.
#[derive(Debug, Default)]
pub struct BindingList {
    entries: Mutex<Vec<Arc<dyn ControlBinding>>>,
}

impl BindingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `binding`, replacing and returning any binding for the same
    /// attribute. The replacement keeps the old binding's slot.
    pub fn add(&self, binding: Arc<dyn ControlBinding>) -> Option<Arc<dyn ControlBinding>> {
        let mut entries = self.entries.lock();
        if let Some(slot) = entries
            .iter_mut()
            .find(|existing| existing.attribute() == binding.attribute())
        {
            debug!(attribute = binding.attribute(), "replacing control binding");
            return Some(std::mem::replace(slot, binding));
        }
        entries.push(binding);
        None
    }

    /// Detach `binding` by identity.
    pub fn remove(&self, binding: &Arc<dyn ControlBinding>) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|existing| !same_binding(existing, binding));
        entries.len() != before
    }

    /// Binding driving `attribute`, if any.
    pub fn get(&self, attribute: &str) -> Option<Arc<dyn ControlBinding>> {
        self.entries
            .lock()
            .iter()
            .find(|b| b.attribute() == attribute)
            .cloned()
    }

    pub fn to_vec(&self) -> Vec<Arc<dyn ControlBinding>> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
