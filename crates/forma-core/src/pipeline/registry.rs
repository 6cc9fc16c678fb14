//! Plugin registry: id → plugin lookup with uniqueness enforced.
//!
//! An explicit owned collection, passed by reference to the renderer.
//! There is no process-wide singleton; callers own the registry and its
//! single-threaded access discipline.

use std::collections::HashMap;

use crate::domain::Plugin;
use crate::pipeline::error::PipelineError;

/// Lookup table from plugin id to plugin instance.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Fails if the id is already taken.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), PipelineError> {
        let id = plugin.id().to_owned();
        if self.plugins.contains_key(&id) {
            return Err(PipelineError::DuplicatePluginId { id });
        }
        self.plugins.insert(id, plugin);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&dyn Plugin> {
        self.plugins.get(id).map(Box::as_ref)
    }

    /// All registered plugins. Order is NOT significant; callers that
    /// need determinism must sort.
    pub fn all(&self) -> Vec<&dyn Plugin> {
        self.plugins.values().map(Box::as_ref).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
