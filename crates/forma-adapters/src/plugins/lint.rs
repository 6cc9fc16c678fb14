//! Lint and formatter configuration.
//!
//! Applies whenever the resolved policy requires the `lint` check,
//! derived from the config's preset, not hardcoded per project type.
//! Depends on `package-manager` so the install-time flags exist before
//! lint tooling is configured on top of them.

use forma_core::domain::{GenerationContext, Plugin, PluginError, ProjectConfig};
use forma_core::pipeline::resolve_policy;

#[derive(Debug)]
pub struct LintPlugin;

impl Plugin for LintPlugin {
    fn id(&self) -> &str {
        "lint"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn dependencies(&self) -> Vec<String> {
        vec!["package-manager".to_owned()]
    }

    fn applies_to(&self, config: &ProjectConfig) -> bool {
        resolve_policy(config).requires_check("lint")
    }

    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
        ctx.add_file(
            ".eslintrc.json",
            br#"{
  "root": true,
  "extends": ["eslint:recommended"],
  "parserOptions": { "ecmaVersion": "latest", "sourceType": "module" },
  "env": { "node": true, "es2022": true }
}
"#
            .to_vec(),
        );

        ctx.add_file(
            ".prettierrc.json",
            b"{\n  \"semi\": true,\n  \"singleQuote\": false,\n  \"trailingComma\": \"all\"\n}\n"
                .to_vec(),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::domain::ProjectType;

    #[test]
    fn applies_at_every_preset_because_lint_is_always_required() {
        for preset in [
            forma_core::domain::StrictnessPreset::Startup,
            forma_core::domain::StrictnessPreset::Growth,
            forma_core::domain::StrictnessPreset::Enterprise,
        ] {
            let config = ProjectConfig::builder()
                .project_type(ProjectType::Library)
                .strictness_preset(preset)
                .build()
                .unwrap();
            assert!(LintPlugin.applies_to(&config), "preset: {preset}");
        }
    }

    #[test]
    fn declares_package_manager_dependency() {
        assert_eq!(LintPlugin.dependencies(), ["package-manager"]);
    }
}
