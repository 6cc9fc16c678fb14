//! Pipeline errors.
//!
//! Every variant is fatal to the current render: no partial file map, no
//! manifest, no retry. The CLI surfaces the message and exits non-zero.

use thiserror::Error;

use crate::domain::PluginError;
use crate::domain::error::ErrorCategory;

/// Errors that occur while resolving or executing the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// Registration-time: two plugins share an id.
    #[error("duplicate plugin id '{id}'")]
    DuplicatePluginId { id: String },

    /// A candidate plugin id is missing from the registry.
    ///
    /// Distinct from [`PipelineError::MissingDependency`]: this is about
    /// the plugin itself, not something it depends on.
    #[error("plugin '{id}' is not registered")]
    UnknownPlugin { id: String },

    /// A plugin declares a dependency id not present in the registry.
    #[error("plugin '{plugin}' depends on '{dependency}', which is not registered")]
    MissingDependency { plugin: String, dependency: String },

    /// One or more cycles among the applicable plugins. The message
    /// enumerates every cycle found, not just the first.
    #[error("dependency cycle(s) detected: {}", .cycles.join("; "))]
    DependencyCycle { cycles: Vec<String> },

    /// A path was written by two or more plugins and at least one of them
    /// declared the `error` conflict policy.
    #[error("conflicting writers for '{path}': {}", .plugins.join(", "))]
    FileConflict { path: String, plugins: Vec<String> },

    /// A plugin's post-apply validation reported problems.
    #[error("plugin '{plugin}' failed validation: {}", .errors.join("; "))]
    PluginValidation { plugin: String, errors: Vec<String> },

    /// A plugin's `apply` failed; propagated verbatim.
    #[error(transparent)]
    PluginApply(#[from] PluginError),

    /// Manifest assembly failed (canonical config serialization).
    #[error("manifest construction failed: {message}")]
    Manifest { message: String },
}

impl PipelineError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicatePluginId { id } => vec![
                format!("Two plugins register as '{}'", id),
                "Rename one of them or remove the duplicate registration".into(),
            ],
            Self::UnknownPlugin { id } => vec![
                format!("'{}' was selected but never registered", id),
                "Register the plugin before rendering".into(),
            ],
            Self::MissingDependency { plugin, dependency } => vec![
                format!("'{}' needs '{}' to be registered", plugin, dependency),
                "Install or register the missing plugin".into(),
                "Try: forma plugins".into(),
            ],
            Self::DependencyCycle { cycles } => {
                let mut s = vec!["Plugin dependencies form a cycle:".to_string()];
                s.extend(cycles.iter().map(|c| format!("  {c}")));
                s.push("Break the cycle by removing one of the dependencies".into());
                s
            }
            Self::FileConflict { path, plugins } => vec![
                format!("'{}' is written by: {}", path, plugins.join(", ")),
                "Disable one of the plugins, or have one declare last-wins".into(),
            ],
            Self::PluginValidation { plugin, .. } => vec![
                format!("Plugin '{}' produced inconsistent output", plugin),
                "This is likely a bug in that plugin".into(),
            ],
            Self::PluginApply(_) => vec![
                "A plugin aborted the render".into(),
                "Re-run with -vv for details".into(),
            ],
            Self::Manifest { .. } => vec![
                "This appears to be a bug in Forma".into(),
                "Please report it with the configuration that triggered it".into(),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePluginId { .. }
            | Self::UnknownPlugin { .. }
            | Self::MissingDependency { .. }
            | Self::DependencyCycle { .. }
            | Self::FileConflict { .. } => ErrorCategory::Validation,
            Self::PluginValidation { .. } | Self::PluginApply(_) | Self::Manifest { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
