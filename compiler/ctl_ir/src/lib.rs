//! Object model for controller expressions.
//!
//! A parse attaches a graph of constructed objects to a caller-owned
//! target:
//!
//! ```text
//! target (ObjectRef::Object)
//!   └─ binding list ──► direct (ControlBinding)
//!                          └─ control-source ──► lfo (ControlSource)
//! ```
//!
//! - [`Controllable`]: anything that has attributes and a binding list
//! - [`ControlBinding`] / [`ControlSource`]: the two constructible
//!   capabilities, told apart by [`Capability`]
//! - [`ControlNode`]: a freshly constructed binding or source
//! - [`ObjectRef`]: the current attachment point during a parse
//! - [`PropertyTable`]: declared, typed attributes with literal coercion
//! - [`Registry`]: name → factory tables for bindings and sources
//!
//! All objects are shared through `Arc` and mutate through interior locks,
//! so independent parses can run on different threads.

mod bindings;
mod describe;
mod error;
mod object;
mod object_core;
mod property;
mod registry;

#[cfg(test)]
mod test_fixtures;

pub use bindings::BindingList;
pub use describe::describe;
pub use error::AttributeError;
pub use object::{
    same_binding, Attribute, AttributeValue, Capability, ControlBinding, ControlNode,
    ControlSource, Controllable, ObjectRef,
};
pub use object_core::ObjectCore;
pub use property::{coerce, PropertyKind, PropertySpec, PropertyTable, Value};
pub use registry::{BindingFactory, ConstructArgs, Factory, Registry, SourceFactory};

/// Implement [`Controllable`] for a type by delegating to an
/// [`ObjectCore`] field.
///
/// ```text
/// struct Element { core: ObjectCore }
/// ctl_ir::impl_controllable!(Element, core);
/// ```
#[macro_export]
macro_rules! impl_controllable {
    ($ty:ty, $field:ident) => {
        impl $crate::Controllable for $ty {
            fn type_name(&self) -> &str {
                self.$field.type_name()
            }

            fn set_attribute(
                &self,
                attribute: &str,
                literal: &str,
            ) -> ::std::result::Result<(), $crate::AttributeError> {
                self.$field.properties().set_literal(attribute, literal)
            }

            fn set_source(
                &self,
                attribute: &str,
                source: ::std::sync::Arc<dyn $crate::ControlSource>,
            ) -> ::std::result::Result<$crate::AttributeValue, $crate::AttributeError> {
                self.$field.properties().set_source(attribute, source)
            }

            fn restore_attribute(
                &self,
                attribute: &str,
                previous: $crate::AttributeValue,
            ) -> ::std::result::Result<(), $crate::AttributeError> {
                self.$field.properties().restore(attribute, previous)
            }

            fn add_binding(
                &self,
                binding: ::std::sync::Arc<dyn $crate::ControlBinding>,
            ) -> ::std::option::Option<::std::sync::Arc<dyn $crate::ControlBinding>> {
                self.$field.bindings().add(binding)
            }

            fn remove_binding(&self, binding: &::std::sync::Arc<dyn $crate::ControlBinding>) -> bool {
                self.$field.bindings().remove(binding)
            }

            fn bindings(&self) -> ::std::vec::Vec<::std::sync::Arc<dyn $crate::ControlBinding>> {
                self.$field.bindings().to_vec()
            }

            fn attributes(&self) -> ::std::vec::Vec<$crate::Attribute> {
                self.$field.properties().snapshot()
            }

            fn assigned(&self) -> ::std::vec::Vec<&'static str> {
                self.$field.properties().assigned()
            }
        }
    };
}
