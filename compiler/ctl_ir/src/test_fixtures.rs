//! Minimal objects for unit tests.

use std::sync::Arc;

use crate::{ControlBinding, ControlSource, ObjectCore, ObjectRef, PropertySpec};

#[derive(Debug)]
pub struct Target {
    pub core: ObjectCore,
}

crate::impl_controllable!(Target, core);

impl Target {
    pub fn new() -> Arc<Self> {
        Arc::new(Target {
            core: ObjectCore::new(
                "target",
                vec![
                    PropertySpec::double("level", 0.0, 1.0, 0.5),
                    PropertySpec::string("label", ""),
                ],
            ),
        })
    }

    pub fn object_ref(self: &Arc<Self>) -> ObjectRef {
        ObjectRef::object(self.clone())
    }
}

#[derive(Debug)]
pub struct Binding {
    pub core: ObjectCore,
    pub attribute: String,
}

crate::impl_controllable!(Binding, core);

impl ControlBinding for Binding {
    fn attribute(&self) -> &str {
        &self.attribute
    }
}

pub fn binding(attribute: &str) -> Arc<dyn ControlBinding> {
    Arc::new(Binding {
        core: ObjectCore::new("binding", vec![PropertySpec::source("control-source")]),
        attribute: attribute.to_owned(),
    })
}

#[derive(Debug)]
pub struct Source {
    pub core: ObjectCore,
}

crate::impl_controllable!(Source, core);

impl ControlSource for Source {}

pub fn source() -> Arc<dyn ControlSource> {
    Arc::new(Source {
        core: ObjectCore::new(
            "source",
            vec![PropertySpec::enumeration("shape", &["flat", "ramp"], 0)],
        ),
    })
}
