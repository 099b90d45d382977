//! Shared state behind a controllable object.

use crate::{BindingList, PropertySpec, PropertyTable};

/// Type name, declared attributes and binding list of one object.
///
/// Concrete objects embed one of these and implement
/// [`Controllable`](crate::Controllable) with
/// [`impl_controllable!`](crate::impl_controllable).
#[derive(Debug)]
pub struct ObjectCore {
    type_name: &'static str,
    properties: PropertyTable,
    bindings: BindingList,
}

impl ObjectCore {
    pub fn new(type_name: &'static str, specs: Vec<PropertySpec>) -> Self {
        ObjectCore {
            type_name,
            properties: PropertyTable::new(type_name, specs),
            bindings: BindingList::new(),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn properties(&self) -> &PropertyTable {
        &self.properties
    }

    #[inline]
    pub fn bindings(&self) -> &BindingList {
        &self.bindings
    }
}
