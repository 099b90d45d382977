//! Graph edits made during one parse, for rollback.

use std::sync::Arc;

use ctl_ir::{AttributeValue, ControlBinding, ObjectRef};
use tracing::{debug, warn};

#[derive(Debug)]
enum Edit {
    /// A binding added to `owner`'s binding list.
    Attach {
        owner: ObjectRef,
        binding: Arc<dyn ControlBinding>,
        /// Binding the attachment displaced, if any.
        replaced: Option<Arc<dyn ControlBinding>>,
    },
    /// A source assigned to an object-valued attribute of `owner`.
    Assign {
        owner: ObjectRef,
        attribute: String,
        previous: AttributeValue,
    },
}

/// Records every binding the parse attached and every source it assigned,
/// so that a failed parse can leave the target as it found it.
///
/// Assignments matter when the target is itself a binding: its
/// `control-source` slot belongs to the caller and outlives the parse.
#[derive(Debug, Default)]
pub struct Journal {
    edits: Vec<Edit>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        owner: ObjectRef,
        binding: Arc<dyn ControlBinding>,
        replaced: Option<Arc<dyn ControlBinding>>,
    ) {
        self.edits.push(Edit::Attach {
            owner,
            binding,
            replaced,
        });
    }

    pub fn record_assignment(&mut self, owner: ObjectRef, attribute: &str, previous: AttributeValue) {
        self.edits.push(Edit::Assign {
            owner,
            attribute: attribute.to_owned(),
            previous,
        });
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Undo all edits, newest first. Returns how many were undone.
    pub fn rollback(&mut self) -> usize {
        let count = self.edits.len();
        while let Some(edit) = self.edits.pop() {
            match edit {
                Edit::Attach {
                    owner,
                    binding,
                    replaced,
                } => {
                    debug!(
                        owner = owner.type_name(),
                        attribute = binding.attribute(),
                        restored = replaced.is_some(),
                        "detaching control binding"
                    );
                    match replaced {
                        // Swaps back into the same slot.
                        Some(previous) => {
                            owner.add_binding(previous);
                        }
                        None => {
                            owner.remove_binding(&binding);
                        }
                    }
                }
                Edit::Assign {
                    owner,
                    attribute,
                    previous,
                } => {
                    debug!(
                        owner = owner.type_name(),
                        %attribute,
                        "restoring control source"
                    );
                    if let Err(error) = owner.restore_attribute(&attribute, previous) {
                        warn!(owner = owner.type_name(), %attribute, %error, "could not restore attribute");
                    }
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests;
