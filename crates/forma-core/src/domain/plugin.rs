//! Plugin contract: the seam between the pipeline and generation logic.
//!
//! This is a **driven port**. The pipeline defines the interface; stack
//! and provider crates (`forma-adapters` ships the built-ins) implement
//! it. The pipeline treats every plugin as an opaque byte producer: it
//! never inspects what a plugin writes, only *where* and *in what order*.

use thiserror::Error;

use crate::domain::config::ProjectConfig;
use crate::domain::context::GenerationContext;
use crate::domain::value_objects::{ConflictPolicy, Phase};

/// A unit of generation logic that conditionally contributes files.
///
/// ## Contract
///
/// - `id` is globally unique within a registry (enforced at registration).
/// - `dependencies` name other plugin ids that must be registered; a
///   dependency that is registered but not applicable to the current
///   config simply does not execute.
/// - `apply` runs exactly once per render, synchronously, with exclusive
///   access to the context. Errors propagate verbatim and abort the
///   render (no retry, no catch-and-log).
/// - `validate` runs right after `apply`; an invalid report aborts the
///   render.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Unique plugin identifier.
    fn id(&self) -> &str;

    /// Plugin version string (informational).
    fn version(&self) -> &str;

    /// Ids of plugins this one depends on.
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    /// Execution phase; `render` unless declared otherwise.
    fn phase(&self) -> Phase {
        Phase::default()
    }

    /// How to treat another plugin writing the same path.
    fn conflict_policy(&self) -> ConflictPolicy {
        ConflictPolicy::default()
    }

    /// Whether this plugin participates in a render of the given config.
    fn applies_to(&self, config: &ProjectConfig) -> bool;

    /// Contribute files to the context.
    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError>;

    /// Post-apply self-check. Default: everything is fine.
    fn validate(&self, _ctx: &GenerationContext<'_>) -> ValidationReport {
        ValidationReport::valid()
    }
}

// ── Errors & reports ─────────────────────────────────────────────────────────

/// Error raised by a plugin's `apply`.
///
/// Carried through the pipeline transparently, so the message a plugin
/// produces is the message the caller sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("plugin '{plugin}' failed: {message}")]
pub struct PluginError {
    pub plugin: String,
    pub message: String,
}

impl PluginError {
    pub fn new(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a plugin's `validate` hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}
