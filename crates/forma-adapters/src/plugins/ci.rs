//! CI workflow generation.
//!
//! Runs in the `ci` phase, after the project content exists. Emits one
//! pipeline definition for the configured provider with a step per
//! policy-required check, so the workflow and the policy can never
//! drift apart.

use forma_core::domain::{
    CiProvider, GenerationContext, PackageManager, Phase, Plugin, PluginError, ProjectConfig,
};

#[derive(Debug)]
pub struct CiWorkflowPlugin;

impl CiWorkflowPlugin {
    fn install_command(manager: PackageManager, frozen: bool) -> &'static str {
        match (manager, frozen) {
            (PackageManager::Npm, true) => "npm ci",
            (PackageManager::Npm, false) => "npm install",
            (PackageManager::Pnpm, true) => "pnpm install --frozen-lockfile",
            (PackageManager::Pnpm, false) => "pnpm install",
            (PackageManager::Yarn, true) => "yarn install --immutable",
            (PackageManager::Yarn, false) => "yarn install",
            (PackageManager::Bun, true) => "bun install --frozen-lockfile",
            (PackageManager::Bun, false) => "bun install",
        }
    }

    /// Command for one required check. `audit` is a package-manager
    /// builtin, not a package.json script.
    fn check_command(manager: PackageManager, check: &str) -> String {
        if check == "audit" {
            format!("{} audit", manager.as_str())
        } else {
            format!("{} {check}", manager.run_command())
        }
    }

    fn github_workflow(ctx: &GenerationContext<'_>) -> String {
        let manager = ctx.config().package_manager();
        let install = Self::install_command(manager, ctx.policy().runtime_safety.frozen_lockfile);

        let mut yaml = String::from(
            "name: ci\n\non:\n  push:\n    branches: [main]\n  pull_request:\n\njobs:\n  checks:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n      - uses: actions/setup-node@v4\n        with:\n          node-version-file: .nvmrc\n",
        );
        yaml.push_str(&format!("      - run: {install}\n"));
        for check in &ctx.policy().required_checks {
            yaml.push_str(&format!("      - run: {}\n", Self::check_command(manager, check)));
        }
        yaml
    }

    fn gitlab_pipeline(ctx: &GenerationContext<'_>) -> String {
        let manager = ctx.config().package_manager();
        let install = Self::install_command(manager, ctx.policy().runtime_safety.frozen_lockfile);

        let mut yaml = String::from("image: node:22\n\nstages:\n  - checks\n");
        for check in &ctx.policy().required_checks {
            yaml.push_str(&format!(
                "\n{check}:\n  stage: checks\n  script:\n    - {install}\n    - {}\n",
                Self::check_command(manager, check)
            ));
        }
        yaml
    }

    fn circle_config(ctx: &GenerationContext<'_>) -> String {
        let manager = ctx.config().package_manager();
        let install = Self::install_command(manager, ctx.policy().runtime_safety.frozen_lockfile);

        let mut yaml = String::from(
            "version: 2.1\n\njobs:\n  checks:\n    docker:\n      - image: cimg/node:22.0\n    steps:\n      - checkout\n",
        );
        yaml.push_str(&format!("      - run: {install}\n"));
        for check in &ctx.policy().required_checks {
            yaml.push_str(&format!("      - run: {}\n", Self::check_command(manager, check)));
        }
        yaml.push_str("\nworkflows:\n  main:\n    jobs:\n      - checks\n");
        yaml
    }
}

impl Plugin for CiWorkflowPlugin {
    fn id(&self) -> &str {
        "ci"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn dependencies(&self) -> Vec<String> {
        vec!["lint".to_owned()]
    }

    fn phase(&self) -> Phase {
        Phase::Ci
    }

    fn applies_to(&self, _config: &ProjectConfig) -> bool {
        true
    }

    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
        match ctx.config().providers().ci {
            CiProvider::GithubActions => {
                let yaml = Self::github_workflow(ctx);
                ctx.add_file(".github/workflows/ci.yml", yaml.into_bytes());
            }
            CiProvider::GitlabCi => {
                let yaml = Self::gitlab_pipeline(ctx);
                ctx.add_file(".gitlab-ci.yml", yaml.into_bytes());
            }
            CiProvider::CircleCi => {
                let yaml = Self::circle_config(ctx);
                ctx.add_file(".circleci/config.yml", yaml.into_bytes());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::domain::{ProjectType, StrictnessPreset};
    use forma_core::pipeline::resolve_policy;

    fn apply_with(
        preset: StrictnessPreset,
        manager: PackageManager,
        ci: CiProvider,
    ) -> forma_core::domain::ProjectConfig {
        forma_core::domain::ProjectConfig::builder()
            .project_type(ProjectType::NextJs)
            .strictness_preset(preset)
            .package_manager(manager)
            .ci_provider(ci)
            .build()
            .unwrap()
    }

    #[test]
    fn github_workflow_has_a_step_per_check() {
        let config = apply_with(
            StrictnessPreset::Growth,
            PackageManager::Pnpm,
            CiProvider::GithubActions,
        );
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);

        CiWorkflowPlugin.apply(&mut ctx).unwrap();

        let yaml =
            String::from_utf8(ctx.get_file(".github/workflows/ci.yml").unwrap().to_vec()).unwrap();
        // Growth policy freezes the lockfile.
        assert!(yaml.contains("pnpm install --frozen-lockfile"));
        assert!(yaml.contains("pnpm run lint"));
        assert!(yaml.contains("pnpm run typecheck"));
        // audit is the package manager's builtin, not a run-script
        assert!(yaml.contains("pnpm audit"));
        assert!(!yaml.contains("pnpm run audit"));
    }

    #[test]
    fn gitlab_provider_writes_gitlab_file() {
        let config = apply_with(
            StrictnessPreset::Startup,
            PackageManager::Npm,
            CiProvider::GitlabCi,
        );
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);

        CiWorkflowPlugin.apply(&mut ctx).unwrap();

        assert!(ctx.has_file(".gitlab-ci.yml"));
        assert!(!ctx.has_file(".github/workflows/ci.yml"));
        let yaml = String::from_utf8(ctx.get_file(".gitlab-ci.yml").unwrap().to_vec()).unwrap();
        // Startup policy does not freeze the lockfile.
        assert!(yaml.contains("npm install"));
        assert!(!yaml.contains("npm ci"));
    }

    #[test]
    fn circleci_provider_writes_circle_config() {
        let config = apply_with(
            StrictnessPreset::Enterprise,
            PackageManager::Yarn,
            CiProvider::CircleCi,
        );
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);

        CiWorkflowPlugin.apply(&mut ctx).unwrap();

        let yaml =
            String::from_utf8(ctx.get_file(".circleci/config.yml").unwrap().to_vec()).unwrap();
        assert!(yaml.contains("yarn install --immutable"));
        assert!(yaml.contains("yarn coverage"));
    }
}
