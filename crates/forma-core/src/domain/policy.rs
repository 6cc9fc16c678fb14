//! Effective policy: the resolved ruleset a render runs under.
//!
//! A [`Policy`] is derived from the configured strictness preset by
//! `pipeline::policy::resolve_policy`. It is immutable once resolved;
//! plugins read it through the generation context.
//!
//! Merging is deliberately explicit: each nested group has its own typed
//! overlay struct and its own field-by-field merge step. No reflection,
//! no generic deep-merge.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VersionPosture;

/// The effective ruleset for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Policy schema version, recorded in the manifest as `policyVersion`.
    pub version: String,
    /// Checks the generated project must wire up (lint, test, ...).
    pub required_checks: Vec<String>,
    /// How tightly generated dependency versions are pinned.
    pub version_posture: VersionPosture,
    pub runtime_safety: RuntimeSafety,
    pub process: ProcessControls,
}

impl Policy {
    /// Whether the policy requires the named check.
    pub fn requires_check(&self, name: &str) -> bool {
        self.required_checks.iter().any(|c| c == name)
    }

    /// Apply an overlay, field by field. `None` fields keep the base value;
    /// nested groups merge through their own typed steps so an overlay that
    /// sets one flag never erases its siblings.
    pub fn merged(self, overlay: PolicyOverlay) -> Self {
        Self {
            version: self.version,
            required_checks: overlay.required_checks.unwrap_or(self.required_checks),
            version_posture: overlay.version_posture.unwrap_or(self.version_posture),
            runtime_safety: self.runtime_safety.merged(&overlay.runtime_safety),
            process: self.process.merged(&overlay.process),
        }
    }
}

// ── Nested groups ────────────────────────────────────────────────────────────

/// Runtime-safety flags baked into generated package setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeSafety {
    /// Refuse to install under an unexpected Node engine.
    pub strict_engines: bool,
    /// CI installs must not mutate the lockfile.
    pub frozen_lockfile: bool,
    /// Lifecycle scripts of dependencies run sandboxed/disabled.
    pub isolated_scripts: bool,
}

impl RuntimeSafety {
    pub fn merged(self, overlay: &RuntimeSafetyOverlay) -> Self {
        Self {
            strict_engines: overlay.strict_engines.unwrap_or(self.strict_engines),
            frozen_lockfile: overlay.frozen_lockfile.unwrap_or(self.frozen_lockfile),
            isolated_scripts: overlay.isolated_scripts.unwrap_or(self.isolated_scripts),
        }
    }
}

/// Process requirements for the repository around the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessControls {
    pub require_code_owners: bool,
    pub require_audit_trail: bool,
}

impl ProcessControls {
    pub fn merged(self, overlay: &ProcessOverlay) -> Self {
        Self {
            require_code_owners: overlay.require_code_owners.unwrap_or(self.require_code_owners),
            require_audit_trail: overlay.require_audit_trail.unwrap_or(self.require_audit_trail),
        }
    }
}

// ── Overlays ─────────────────────────────────────────────────────────────────

/// Partial policy: what a strictness preset overrides.
#[derive(Debug, Clone, Default)]
pub struct PolicyOverlay {
    pub required_checks: Option<Vec<String>>,
    pub version_posture: Option<VersionPosture>,
    pub runtime_safety: RuntimeSafetyOverlay,
    pub process: ProcessOverlay,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeSafetyOverlay {
    pub strict_engines: Option<bool>,
    pub frozen_lockfile: Option<bool>,
    pub isolated_scripts: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOverlay {
    pub require_code_owners: Option<bool>,
    pub require_audit_trail: Option<bool>,
}
