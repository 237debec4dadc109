//! Backend resolution.
//!
//! The [`Service`](crate::Service) asks a [`BackendResolver`] for a backend
//! the first time an identifier is dispatched. [`BackendRegistry`] is the
//! plain map-backed resolver; any `Fn(&str) -> Option<Arc<dyn Backend>>`
//! also works, for backends built lazily.

use std::collections::HashMap;
use std::sync::Arc;

use vufind_search_core::Backend;

/// Looks up backends by identifier.
pub trait BackendResolver: Send + Sync {
    /// Backend registered for `identifier`, if any
    fn resolve(&self, identifier: &str) -> Option<Arc<dyn Backend>>;
}

impl<F> BackendResolver for F
where
    F: Fn(&str) -> Option<Arc<dyn Backend>> + Send + Sync,
{
    fn resolve(&self, identifier: &str) -> Option<Arc<dyn Backend>> {
        self(identifier)
    }
}

/// Map of backends keyed by their own identifier.
#[derive(Default, Clone)]
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn Backend>>,
}

impl BackendRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `backend` under its identifier, replacing any previous one.
    ///
    /// Returns the replaced backend.
    pub fn register(&mut self, backend: Arc<dyn Backend>) -> Option<Arc<dyn Backend>> {
        self.backends
            .insert(backend.identifier().to_string(), backend)
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, backend: Arc<dyn Backend>) -> Self {
        self.register(backend);
        self
    }

    /// Whether a backend is registered for `identifier`
    pub fn contains(&self, identifier: &str) -> bool {
        self.backends.contains_key(identifier)
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.backends.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl BackendResolver for BackendRegistry {
    fn resolve(&self, identifier: &str) -> Option<Arc<dyn Backend>> {
        self.backends.get(identifier).cloned()
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("backends", &self.identifiers())
            .finish()
    }
}
