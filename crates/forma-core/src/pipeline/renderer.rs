//! Renderer - main pipeline orchestrator.
//!
//! Drives one render end to end:
//! 1. Filter registered plugins by applicability
//! 2. Resolve dependency order (cycles and missing deps abort)
//! 3. Group into phases
//! 4. Execute phases against one shared context, attributing writers
//! 5. Resolve write conflicts per policy
//! 6. Normalize, sort, hash, build the manifest
//!
//! Deterministic for fixed inputs: same config, policy, and registered
//! plugin set always produce byte-identical output. Any failure aborts
//! the whole render; no partial file map or manifest ever escapes.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, instrument};

use crate::domain::{
    ConflictPolicy, GenerationContext, Manifest, ManifestEntry, Plugin, Policy, ProjectConfig,
    RenderResult, RenderedFile, config_hash, normalize_line_endings, sha256_hex,
};
use crate::pipeline::error::PipelineError;
use crate::pipeline::graph::resolve_plugin_order;
use crate::pipeline::phases::group_plugins_by_phase;
use crate::pipeline::registry::PluginRegistry;

/// Pipeline orchestrator. Borrows the registry; owns nothing else.
pub struct Renderer<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    /// Run the full pipeline.
    ///
    /// `existing_files` seeds the context when generating into a
    /// directory that already has content, so plugins can check "does
    /// this already exist"; seeded entries are not writes and never
    /// count toward conflicts.
    #[instrument(skip_all, fields(config = %config))]
    pub fn render(
        &self,
        config: &ProjectConfig,
        policy: &Policy,
        existing_files: Option<HashMap<String, Vec<u8>>>,
    ) -> Result<RenderResult, PipelineError> {
        // 1. Applicability filter.
        let mut applicable: Vec<&dyn Plugin> = self
            .registry
            .all()
            .into_iter()
            .filter(|plugin| plugin.applies_to(config))
            .collect();
        applicable.sort_by(|a, b| a.id().cmp(b.id()));
        debug!(applicable = applicable.len(), "plugins selected");

        // 2-3. Order resolution and phase grouping.
        let order = resolve_plugin_order(&applicable, self.registry)?;
        let plan = group_plugins_by_phase(&order);

        // 4. One context per render call.
        let mut ctx = match existing_files {
            Some(seed) => GenerationContext::with_existing(config, policy, seed),
            None => GenerationContext::new(config, policy),
        };

        // 5. Phase-ordered execution with writer attribution.
        let mut writers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (phase, plugins) in plan.iter() {
            if plugins.is_empty() {
                continue;
            }
            debug!(phase = %phase, plugins = plugins.len(), "executing phase");

            for plugin in plugins {
                plugin.apply(&mut ctx)?;

                let report = plugin.validate(&ctx);
                if !report.valid {
                    return Err(PipelineError::PluginValidation {
                        plugin: plugin.id().to_owned(),
                        errors: report.errors,
                    });
                }

                for path in ctx.drain_writes() {
                    let contributors = writers.entry(path).or_default();
                    if !contributors.iter().any(|id| id == plugin.id()) {
                        contributors.push(plugin.id().to_owned());
                    }
                }
            }
        }

        // 6. Conflict resolution. Paths are visited in ascending order,
        // so the first conflicting path reported is deterministic.
        for (path, contributors) in &writers {
            if contributors.len() < 2 {
                continue;
            }
            let any_errors = contributors.iter().any(|id| {
                self.registry
                    .get(id)
                    .is_some_and(|plugin| plugin.conflict_policy() == ConflictPolicy::Error)
            });
            if any_errors {
                return Err(PipelineError::FileConflict {
                    path: path.clone(),
                    plugins: contributors.clone(),
                });
            }
            // All last-wins: the map already holds the final write in
            // phase-then-id execution order.
        }

        // 7-8. Normalize, explicit sort, hash, manifest.
        let mut files: Vec<RenderedFile> = ctx
            .into_files()
            .into_iter()
            .map(|(path, contents)| RenderedFile {
                path,
                contents: normalize_line_endings(&contents),
            })
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let entries: Vec<ManifestEntry> = files
            .iter()
            .map(|file| ManifestEntry {
                path: file.path.clone(),
                sha256: sha256_hex(&file.contents),
            })
            .collect();

        let config_digest = config_hash(config).map_err(|e| PipelineError::Manifest {
            message: e.to_string(),
        })?;

        let manifest = Manifest {
            generator_version: crate::VERSION.to_owned(),
            policy_version: policy.version.clone(),
            config_hash: config_digest,
            files: entries,
        };

        info!(files = files.len(), "render complete");

        // 9. The sole pipeline output.
        Ok(RenderResult { files, manifest })
    }
}
