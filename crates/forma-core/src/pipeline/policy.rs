//! Policy resolution: base policy + strictness-preset overlay.
//!
//! Three presets with strictly increasing required-check sets and a
//! tightening version posture. Process controls (code owners, audit
//! trail) switch on only at the strictest tier. Each nested group merges
//! through its own typed step (`domain::policy`), so a preset that
//! overrides one flag never erases siblings.

use crate::domain::{
    Policy, PolicyOverlay, ProcessControls, ProcessOverlay, ProjectConfig, RuntimeSafety,
    RuntimeSafetyOverlay, StrictnessPreset, VersionPosture,
};

/// Version of the policy schema, recorded in every manifest.
pub const POLICY_VERSION: &str = "2025.08";

/// Resolve the effective policy for a config.
pub fn resolve_policy(config: &ProjectConfig) -> Policy {
    base_policy().merged(preset_overlay(config.strictness_preset()))
}

/// The fixed base every preset starts from. Matches the startup tier so
/// the loosest preset is a no-op overlay.
fn base_policy() -> Policy {
    Policy {
        version: POLICY_VERSION.to_owned(),
        required_checks: checks(&["lint", "test"]),
        version_posture: VersionPosture::LatestMajor,
        runtime_safety: RuntimeSafety {
            strict_engines: false,
            frozen_lockfile: false,
            isolated_scripts: true,
        },
        process: ProcessControls {
            require_code_owners: false,
            require_audit_trail: false,
        },
    }
}

fn preset_overlay(preset: StrictnessPreset) -> PolicyOverlay {
    match preset {
        StrictnessPreset::Startup => PolicyOverlay::default(),

        StrictnessPreset::Growth => PolicyOverlay {
            required_checks: Some(checks(&["lint", "test", "typecheck", "audit"])),
            version_posture: Some(VersionPosture::PinnedMinor),
            runtime_safety: RuntimeSafetyOverlay {
                frozen_lockfile: Some(true),
                ..Default::default()
            },
            process: ProcessOverlay::default(),
        },

        StrictnessPreset::Enterprise => PolicyOverlay {
            required_checks: Some(checks(&[
                "lint",
                "test",
                "typecheck",
                "audit",
                "coverage",
                "licenses",
            ])),
            version_posture: Some(VersionPosture::PinnedExact),
            runtime_safety: RuntimeSafetyOverlay {
                strict_engines: Some(true),
                frozen_lockfile: Some(true),
                ..Default::default()
            },
            process: ProcessOverlay {
                require_code_owners: Some(true),
                require_audit_trail: Some(true),
            },
        },
    }
}

fn checks(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectType;

    fn config_with(preset: StrictnessPreset) -> ProjectConfig {
        ProjectConfig::builder()
            .project_type(ProjectType::NextJs)
            .strictness_preset(preset)
            .build()
            .unwrap()
    }

    #[test]
    fn startup_matches_base() {
        let policy = resolve_policy(&config_with(StrictnessPreset::Startup));
        assert_eq!(policy.required_checks, ["lint", "test"]);
        assert_eq!(policy.version_posture, VersionPosture::LatestMajor);
        assert!(!policy.process.require_code_owners);
        assert!(policy.runtime_safety.isolated_scripts);
    }

    #[test]
    fn check_sets_are_strictly_increasing() {
        let startup = resolve_policy(&config_with(StrictnessPreset::Startup));
        let growth = resolve_policy(&config_with(StrictnessPreset::Growth));
        let enterprise = resolve_policy(&config_with(StrictnessPreset::Enterprise));

        assert!(startup.required_checks.len() < growth.required_checks.len());
        assert!(growth.required_checks.len() < enterprise.required_checks.len());
        for check in &startup.required_checks {
            assert!(growth.requires_check(check));
        }
        for check in &growth.required_checks {
            assert!(enterprise.requires_check(check));
        }
    }

    #[test]
    fn version_posture_tightens_per_tier() {
        assert_eq!(
            resolve_policy(&config_with(StrictnessPreset::Startup)).version_posture,
            VersionPosture::LatestMajor
        );
        assert_eq!(
            resolve_policy(&config_with(StrictnessPreset::Growth)).version_posture,
            VersionPosture::PinnedMinor
        );
        assert_eq!(
            resolve_policy(&config_with(StrictnessPreset::Enterprise)).version_posture,
            VersionPosture::PinnedExact
        );
    }

    #[test]
    fn process_controls_only_at_enterprise() {
        assert!(!resolve_policy(&config_with(StrictnessPreset::Growth))
            .process
            .require_code_owners);

        let enterprise = resolve_policy(&config_with(StrictnessPreset::Enterprise));
        assert!(enterprise.process.require_code_owners);
        assert!(enterprise.process.require_audit_trail);
    }

    #[test]
    fn growth_overlay_keeps_base_runtime_siblings() {
        let growth = resolve_policy(&config_with(StrictnessPreset::Growth));
        // Overlay only sets frozen_lockfile; siblings come from the base.
        assert!(growth.runtime_safety.frozen_lockfile);
        assert!(!growth.runtime_safety.strict_engines);
        assert!(growth.runtime_safety.isolated_scripts);
    }

    #[test]
    fn policy_version_is_recorded() {
        let policy = resolve_policy(&config_with(StrictnessPreset::Startup));
        assert_eq!(policy.version, POLICY_VERSION);
    }
}
