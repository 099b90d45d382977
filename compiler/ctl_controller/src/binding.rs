//! Control bindings.

use ctl_ir::{ControlBinding, ObjectCore, PropertySpec};
use tracing::debug;

/// Drives one attribute of its owner from a single control source.
#[derive(Debug)]
pub struct DirectControlBinding {
    core: ObjectCore,
    owner: String,
    attribute: String,
}

ctl_ir::impl_controllable!(DirectControlBinding, core);

impl DirectControlBinding {
    pub fn new(owner: &str, attribute: &str) -> Self {
        debug!(owner, attribute, "constructing direct control-binding");
        DirectControlBinding {
            core: ObjectCore::new(
                "direct",
                vec![
                    PropertySpec::source("control-source"),
                    PropertySpec::boolean("absolute", false),
                ],
            ),
            owner: owner.to_owned(),
            attribute: attribute.to_owned(),
        }
    }

    /// Type name of the object this binding was created for.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl ControlBinding for DirectControlBinding {
    fn attribute(&self) -> &str {
        &self.attribute
    }
}

/// Drives a packed ARGB color from one source per channel.
#[derive(Debug)]
pub struct ArgbControlBinding {
    core: ObjectCore,
    owner: String,
    attribute: String,
}

ctl_ir::impl_controllable!(ArgbControlBinding, core);

/// Channel slots, alpha first.
const ARGB_CHANNELS: [&str; 4] = [
    "control-source-a",
    "control-source-r",
    "control-source-g",
    "control-source-b",
];

impl ArgbControlBinding {
    pub fn new(owner: &str, attribute: &str) -> Self {
        debug!(owner, attribute, "constructing argb control-binding");
        ArgbControlBinding {
            core: ObjectCore::new(
                "argb",
                ARGB_CHANNELS.iter().map(|&slot| PropertySpec::source(slot)).collect(),
            ),
            owner: owner.to_owned(),
            attribute: attribute.to_owned(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl ControlBinding for ArgbControlBinding {
    fn attribute(&self) -> &str {
        &self.attribute
    }
}

#[cfg(test)]
mod tests;
