//! Name → factory tables for bindings and sources.
//!
//! The registry is built once before parsing and then shared by reference.
//! Registration needs `&mut Registry`, so the borrow checker keeps new
//! entries from appearing while a parse holds the registry.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{Capability, ControlBinding, ControlNode, ControlSource, ObjectRef};

/// Constructs a binding for an attribute of its owner.
pub trait BindingFactory: Send + Sync {
    fn create(&self, owner: &ObjectRef, attribute: &str) -> Arc<dyn ControlBinding>;
}

impl<F> BindingFactory for F
where
    F: Fn(&ObjectRef, &str) -> Arc<dyn ControlBinding> + Send + Sync,
{
    fn create(&self, owner: &ObjectRef, attribute: &str) -> Arc<dyn ControlBinding> {
        self(owner, attribute)
    }
}

/// Constructs a control source.
pub trait SourceFactory: Send + Sync {
    fn create(&self) -> Arc<dyn ControlSource>;
}

impl<F> SourceFactory for F
where
    F: Fn() -> Arc<dyn ControlSource> + Send + Sync,
{
    fn create(&self) -> Arc<dyn ControlSource> {
        self()
    }
}

/// A registered factory, borrowed from the registry.
#[derive(Clone, Copy)]
pub enum Factory<'r> {
    Binding(&'r dyn BindingFactory),
    Source(&'r dyn SourceFactory),
}

/// Construction arguments; the variant selects the table.
#[derive(Clone, Copy, Debug)]
pub enum ConstructArgs<'a> {
    /// Bindings are created against the object and attribute they drive.
    Binding {
        owner: &'a ObjectRef,
        attribute: &'a str,
    },
    Source,
}

impl ConstructArgs<'_> {
    pub fn capability(&self) -> Capability {
        match self {
            ConstructArgs::Binding { .. } => Capability::Binding,
            ConstructArgs::Source => Capability::Source,
        }
    }
}

/// Binding and source factories keyed by name.
#[derive(Default)]
pub struct Registry {
    bindings: FxHashMap<String, Box<dyn BindingFactory>>,
    sources: FxHashMap<String, Box<dyn SourceFactory>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding factory. A previous factory under the same name
    /// is replaced and returned.
    pub fn register_binding<F>(&mut self, name: &str, factory: F) -> Option<Box<dyn BindingFactory>>
    where
        F: BindingFactory + 'static,
    {
        debug!(name, "registering control-binding");
        self.bindings.insert(name.to_owned(), Box::new(factory))
    }

    /// Register a source factory. A previous factory under the same name is
    /// replaced and returned.
    pub fn register_source<F>(&mut self, name: &str, factory: F) -> Option<Box<dyn SourceFactory>>
    where
        F: SourceFactory + 'static,
    {
        debug!(name, "registering control-source");
        self.sources.insert(name.to_owned(), Box::new(factory))
    }

    /// Look up a factory by capability and name.
    pub fn lookup(&self, capability: Capability, name: &str) -> Option<Factory<'_>> {
        match capability {
            Capability::Binding => self
                .bindings
                .get(name)
                .map(|f| Factory::Binding(f.as_ref())),
            Capability::Source => self.sources.get(name).map(|f| Factory::Source(f.as_ref())),
        }
    }

    /// Construct a new object from the factory registered under `name`.
    ///
    /// An unknown name is not an error here: it is logged and `None` is
    /// returned for the caller to report.
    pub fn construct(&self, name: &str, args: ConstructArgs<'_>) -> Option<ControlNode> {
        let capability = args.capability();
        match (self.lookup(capability, name), args) {
            (Some(Factory::Binding(factory)), ConstructArgs::Binding { owner, attribute }) => {
                Some(ControlNode::Binding(factory.create(owner, attribute)))
            }
            (Some(Factory::Source(factory)), ConstructArgs::Source) => {
                Some(ControlNode::Source(factory.create()))
            }
            _ => {
                warn!(
                    name,
                    %capability,
                    entries = self.len(capability),
                    "no factory registered"
                );
                None
            }
        }
    }

    /// Registered names for `capability`, sorted.
    pub fn names(&self, capability: Capability) -> Vec<&str> {
        let mut names: Vec<&str> = match capability {
            Capability::Binding => self.bindings.keys().map(String::as_str).collect(),
            Capability::Source => self.sources.keys().map(String::as_str).collect(),
        };
        names.sort_unstable();
        names
    }

    /// Number of entries registered for `capability`.
    pub fn len(&self, capability: Capability) -> usize {
        match capability {
            Capability::Binding => self.bindings.len(),
            Capability::Source => self.sources.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.sources.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("bindings", &self.names(Capability::Binding))
            .field("sources", &self.names(Capability::Source))
            .finish()
    }
}
