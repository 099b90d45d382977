//! Factory functions and the stock registry.

use std::sync::Arc;

use ctl_ir::{ControlBinding, ControlSource, ObjectRef, Registry};

use crate::{ArgbControlBinding, DirectControlBinding, LfoControlSource};

/// Binding factory for `direct`.
pub fn direct(owner: &ObjectRef, attribute: &str) -> Arc<dyn ControlBinding> {
    Arc::new(DirectControlBinding::new(owner.type_name(), attribute))
}

/// Binding factory for `argb`.
pub fn argb(owner: &ObjectRef, attribute: &str) -> Arc<dyn ControlBinding> {
    Arc::new(ArgbControlBinding::new(owner.type_name(), attribute))
}

/// Source factory for `lfo`.
pub fn lfo() -> Arc<dyn ControlSource> {
    Arc::new(LfoControlSource::new())
}

/// A registry with `direct` and `argb` bindings and the `lfo` source.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register_binding("argb", argb);
    registry.register_binding("direct", direct);
    registry.register_source("lfo", lfo);
    registry
}
