//! Package-manager setup: `.npmrc` and `.nvmrc`.
//!
//! The `.npmrc` flags come straight from the resolved policy's
//! runtime-safety group, so a stricter preset tightens installs without
//! this plugin knowing anything about presets.

use forma_core::domain::{
    GenerationContext, Phase, Plugin, PluginError, ProjectConfig, VersionPosture,
};

const NODE_VERSION: &str = "22";

#[derive(Debug)]
pub struct PackageManagerPlugin;

impl Plugin for PackageManagerPlugin {
    fn id(&self) -> &str {
        "package-manager"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn phase(&self) -> Phase {
        Phase::Pre
    }

    fn applies_to(&self, _config: &ProjectConfig) -> bool {
        true
    }

    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
        let safety = ctx.policy().runtime_safety;
        let mut npmrc = Vec::new();
        if safety.strict_engines {
            npmrc.push("engine-strict=true");
        }
        if safety.isolated_scripts {
            npmrc.push("ignore-scripts=true");
        }
        if ctx.policy().version_posture == VersionPosture::PinnedExact {
            npmrc.push("save-exact=true");
        }

        let mut contents = npmrc.join("\n");
        contents.push('\n');
        ctx.add_file(".npmrc", contents.into_bytes());
        ctx.add_file(".nvmrc", format!("{NODE_VERSION}\n").into_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::domain::{ProjectType, StrictnessPreset};
    use forma_core::pipeline::resolve_policy;

    fn context_for(preset: StrictnessPreset) -> (ProjectConfig, forma_core::domain::Policy) {
        let config = ProjectConfig::builder()
            .project_type(ProjectType::NextJs)
            .strictness_preset(preset)
            .build()
            .unwrap();
        let policy = resolve_policy(&config);
        (config, policy)
    }

    #[test]
    fn startup_npmrc_only_isolates_scripts() {
        let (config, policy) = context_for(StrictnessPreset::Startup);
        let mut ctx = GenerationContext::new(&config, &policy);
        PackageManagerPlugin.apply(&mut ctx).unwrap();

        let body = String::from_utf8(ctx.get_file(".npmrc").unwrap().to_vec()).unwrap();
        assert!(body.contains("ignore-scripts=true"));
        assert!(!body.contains("engine-strict"));
        assert!(!body.contains("save-exact"));
    }

    #[test]
    fn enterprise_npmrc_is_fully_strict() {
        let (config, policy) = context_for(StrictnessPreset::Enterprise);
        let mut ctx = GenerationContext::new(&config, &policy);
        PackageManagerPlugin.apply(&mut ctx).unwrap();

        let body = String::from_utf8(ctx.get_file(".npmrc").unwrap().to_vec()).unwrap();
        assert!(body.contains("engine-strict=true"));
        assert!(body.contains("save-exact=true"));
    }

    #[test]
    fn nvmrc_pins_the_node_line() {
        let (config, policy) = context_for(StrictnessPreset::Startup);
        let mut ctx = GenerationContext::new(&config, &policy);
        PackageManagerPlugin.apply(&mut ctx).unwrap();

        assert_eq!(ctx.get_file(".nvmrc"), Some(&b"22\n"[..]));
    }
}
