//! Generation context: the in-memory accumulator plugins write into.
//!
//! One context exists per render call, exclusively owned by the renderer
//! and lent to one plugin at a time. It performs no I/O; the only way
//! prior filesystem state enters it is the `existing` seed map supplied
//! by the caller.

use std::collections::HashMap;

use crate::domain::config::ProjectConfig;
use crate::domain::policy::Policy;

/// In-memory path→bytes store plus read-only config/policy access.
///
/// Insertion order is irrelevant: the renderer re-sorts the final file
/// map explicitly. `add_file` on an existing path overwrites; last write
/// in call order wins at the context level.
pub struct GenerationContext<'a> {
    files: HashMap<String, Vec<u8>>,
    // Every add_file path, drained by the renderer after each plugin so
    // multi-writer conflicts stay observable. Seeded files are not writes.
    written: Vec<String>,
    config: &'a ProjectConfig,
    policy: &'a Policy,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a ProjectConfig, policy: &'a Policy) -> Self {
        Self {
            files: HashMap::new(),
            written: Vec::new(),
            config,
            policy,
        }
    }

    /// Context pre-seeded with files that already exist at the target,
    /// so plugins can ask "does this already exist" without overwriting.
    pub fn with_existing(
        config: &'a ProjectConfig,
        policy: &'a Policy,
        existing: HashMap<String, Vec<u8>>,
    ) -> Self {
        Self {
            files: existing,
            written: Vec::new(),
            config,
            policy,
        }
    }

    /// Store `bytes` under `path`, overwriting any previous content.
    pub fn add_file(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let path = path.into();
        self.written.push(path.clone());
        self.files.insert(path, bytes.into());
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn get_file(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn config(&self) -> &ProjectConfig {
        self.config
    }

    pub fn policy(&self) -> &Policy {
        self.policy
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Paths written since the last drain, in call order.
    pub(crate) fn drain_writes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.written)
    }

    pub(crate) fn into_files(self) -> HashMap<String, Vec<u8>> {
        self.files
    }
}
