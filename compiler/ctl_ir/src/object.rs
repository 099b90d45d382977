//! Controllable objects and the binding/source capabilities.

use std::fmt;
use std::sync::Arc;

use crate::{AttributeError, Value};

/// The two things a factory can construct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Capability {
    /// Attached to an object's binding list; drives one of its attributes.
    Binding,
    /// Assigned as the value of an attribute; produces values for a binding.
    Source,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Binding => "control-binding",
            Capability::Source => "control-source",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object with typed attributes and a list of control bindings.
///
/// Targets, bindings and sources all implement this. Methods take `&self`;
/// implementations lock internally so that an object graph can be shared
/// across threads.
pub trait Controllable: Send + Sync + fmt::Debug {
    /// Registered type name, e.g. `"lfo"`.
    fn type_name(&self) -> &str;

    /// Convert `literal` to the attribute's declared type and assign it.
    fn set_attribute(&self, attribute: &str, literal: &str) -> Result<(), AttributeError>;

    /// Assign a control source as the value of an object-valued attribute.
    /// Returns the value it displaced.
    fn set_source(
        &self,
        attribute: &str,
        source: Arc<dyn ControlSource>,
    ) -> Result<AttributeValue, AttributeError>;

    /// Undo a `set_source`: put `previous` back and forget the assignment.
    fn restore_attribute(&self, attribute: &str, previous: AttributeValue)
        -> Result<(), AttributeError>;

    /// Attach a binding. A binding already present for the same attribute
    /// is replaced and returned.
    fn add_binding(&self, binding: Arc<dyn ControlBinding>) -> Option<Arc<dyn ControlBinding>>;

    /// Detach `binding` (by identity). Returns whether it was attached.
    fn remove_binding(&self, binding: &Arc<dyn ControlBinding>) -> bool;

    /// Attached bindings, in attachment order.
    fn bindings(&self) -> Vec<Arc<dyn ControlBinding>>;

    /// Snapshot of all declared attributes and their current values.
    fn attributes(&self) -> Vec<Attribute>;

    /// Names of explicitly assigned attributes, in assignment order.
    fn assigned(&self) -> Vec<&'static str>;
}

/// A constructed object that drives an attribute of its owner.
pub trait ControlBinding: Controllable {
    /// Name of the owner attribute this binding drives.
    fn attribute(&self) -> &str;
}

/// A constructed object that produces values for a binding.
pub trait ControlSource: Controllable {}

/// Identity comparison for bindings (data pointer only).
pub fn same_binding(a: &Arc<dyn ControlBinding>, b: &Arc<dyn ControlBinding>) -> bool {
    std::ptr::eq(Arc::as_ptr(a).cast::<()>(), Arc::as_ptr(b).cast::<()>())
}

/// Current value of a declared attribute.
#[derive(Clone, Debug)]
pub enum AttributeValue {
    /// Object-valued attribute with nothing assigned.
    Unset,
    Literal(Value),
    Source(Arc<dyn ControlSource>),
}

/// Name and value of a declared attribute.
#[derive(Clone, Debug)]
pub struct Attribute {
    pub name: &'static str,
    pub value: AttributeValue,
}

impl Attribute {
    /// The literal value, if this attribute holds one.
    pub fn literal(&self) -> Option<&Value> {
        match &self.value {
            AttributeValue::Literal(value) => Some(value),
            AttributeValue::Unset | AttributeValue::Source(_) => None,
        }
    }

    /// The assigned source, if this attribute holds one.
    pub fn source(&self) -> Option<&Arc<dyn ControlSource>> {
        match &self.value {
            AttributeValue::Source(source) => Some(source),
            AttributeValue::Unset | AttributeValue::Literal(_) => None,
        }
    }
}

/// A freshly constructed object, tagged by capability.
#[derive(Clone, Debug)]
pub enum ControlNode {
    Binding(Arc<dyn ControlBinding>),
    Source(Arc<dyn ControlSource>),
}

impl ControlNode {
    pub fn capability(&self) -> Capability {
        match self {
            ControlNode::Binding(_) => Capability::Binding,
            ControlNode::Source(_) => Capability::Source,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            ControlNode::Binding(binding) => binding.type_name(),
            ControlNode::Source(source) => source.type_name(),
        }
    }

    pub fn as_binding(&self) -> Option<&Arc<dyn ControlBinding>> {
        match self {
            ControlNode::Binding(binding) => Some(binding),
            ControlNode::Source(_) => None,
        }
    }

    pub fn as_source(&self) -> Option<&Arc<dyn ControlSource>> {
        match self {
            ControlNode::Source(source) => Some(source),
            ControlNode::Binding(_) => None,
        }
    }
}

/// An attachment point: the object the parser is currently configuring.
///
/// Plain targets carry no capability. Whether the current object is a
/// binding decides how the next function name is resolved.
#[derive(Clone, Debug)]
pub enum ObjectRef {
    Object(Arc<dyn Controllable>),
    Binding(Arc<dyn ControlBinding>),
    Source(Arc<dyn ControlSource>),
}

/// Run `$body` with `$obj` bound to the underlying object, whatever its
/// capability.
macro_rules! with_object {
    ($target:expr, $obj:ident => $body:expr) => {
        match $target {
            ObjectRef::Object($obj) => $body,
            ObjectRef::Binding($obj) => $body,
            ObjectRef::Source($obj) => $body,
        }
    };
}

impl ObjectRef {
    /// Wrap a caller-owned target.
    pub fn object(object: Arc<dyn Controllable>) -> Self {
        ObjectRef::Object(object)
    }

    pub fn capability(&self) -> Option<Capability> {
        match self {
            ObjectRef::Object(_) => None,
            ObjectRef::Binding(_) => Some(Capability::Binding),
            ObjectRef::Source(_) => Some(Capability::Source),
        }
    }

    #[inline]
    pub fn is_binding(&self) -> bool {
        matches!(self, ObjectRef::Binding(_))
    }

    pub fn type_name(&self) -> &str {
        with_object!(self, obj => obj.type_name())
    }

    pub fn set_attribute(&self, attribute: &str, literal: &str) -> Result<(), AttributeError> {
        with_object!(self, obj => obj.set_attribute(attribute, literal))
    }

    pub fn set_source(
        &self,
        attribute: &str,
        source: Arc<dyn ControlSource>,
    ) -> Result<AttributeValue, AttributeError> {
        with_object!(self, obj => obj.set_source(attribute, source))
    }

    pub fn restore_attribute(
        &self,
        attribute: &str,
        previous: AttributeValue,
    ) -> Result<(), AttributeError> {
        with_object!(self, obj => obj.restore_attribute(attribute, previous))
    }

    pub fn add_binding(&self, binding: Arc<dyn ControlBinding>) -> Option<Arc<dyn ControlBinding>> {
        with_object!(self, obj => obj.add_binding(binding))
    }

    pub fn remove_binding(&self, binding: &Arc<dyn ControlBinding>) -> bool {
        with_object!(self, obj => obj.remove_binding(binding))
    }

    pub fn bindings(&self) -> Vec<Arc<dyn ControlBinding>> {
        with_object!(self, obj => obj.bindings())
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        with_object!(self, obj => obj.attributes())
    }

    pub fn assigned(&self) -> Vec<&'static str> {
        with_object!(self, obj => obj.assigned())
    }

    /// Look up one attribute by name.
    pub fn attribute(&self, name: &str) -> Option<Attribute> {
        self.attributes().into_iter().find(|a| a.name == name)
    }

    /// Whether both refer to the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        std::ptr::eq(self.data_ptr(), other.data_ptr())
    }

    fn data_ptr(&self) -> *const () {
        with_object!(self, obj => Arc::as_ptr(obj).cast::<()>())
    }
}

impl From<ControlNode> for ObjectRef {
    fn from(node: ControlNode) -> Self {
        match node {
            ControlNode::Binding(binding) => ObjectRef::Binding(binding),
            ControlNode::Source(source) => ObjectRef::Source(source),
        }
    }
}

#[cfg(test)]
mod tests;
