//! The `factories` command.

use std::fmt::Write;

use ctl_controller::default_registry;
use ctl_ir::Capability;

/// List the registered binding and source names.
pub fn list_factories() -> String {
    let registry = default_registry();
    let mut out = String::new();
    for capability in [Capability::Binding, Capability::Source] {
        let _ = writeln!(out, "{capability}s:");
        for name in registry.names(capability) {
            let _ = writeln!(out, "  {name}");
        }
    }
    out
}
