//! Registry of available catalog backends
//!
//! Backends are keyed by their display name. Registering a name that is already
//! present is a no-op, so `register` can be called any number of times.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::CatalogBackend;

#[derive(Default)]
pub struct BackendRegistry {
    backends: Vec<Arc<dyn CatalogBackend>>,
}

impl BackendRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a backend unless one with the same name is registered.
    ///
    /// Returns whether the registry changed.
    pub fn add(&mut self, backend: Arc<dyn CatalogBackend>) -> bool {
        let name = backend.name();
        if self.contains(name) {
            debug!(backend = name, "backend already registered");
            return false;
        }
        debug!(backend = name, "registered backend");
        self.backends.push(backend);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a backend by display name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn CatalogBackend>> {
        self.backends.iter().find(|b| b.name() == name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn CatalogBackend>> {
        self.backends.iter()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("backends", &self.names())
            .finish()
    }
}
