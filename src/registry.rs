//! Shared registries carried across nested pipeline scopes.
//!
//! A registry bag is created once per generation run and handed down to
//! every child context, so schemas registered while an operation is being
//! assembled are visible to the document-level post-processor that flushes
//! them into `components.schemas`. Registries are never reused across runs.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Named schema-component store shared across scopes of one run.
///
/// Cloning the registry clones the handle, not the contents: all clones
/// write into the same underlying map. The pipeline is strictly sequential,
/// so interior mutability is never observed concurrently.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    definitions: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named schema, replacing any previous definition
    pub fn register(&self, name: String, schema: Value) {
        self.definitions.borrow_mut().insert(name, schema);
    }

    /// Snapshot of all registered definitions, ordered by name
    pub fn definitions(&self) -> BTreeMap<String, Value> {
        self.definitions.borrow().clone()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.definitions.borrow().is_empty()
    }
}

/// The bag of stateful singletons a context carries.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    /// Shared schema-component registry
    pub schemas: ComponentRegistry,
}

impl Registries {
    /// Create a fresh registry bag
    pub fn new() -> Self {
        Self::default()
    }
}
