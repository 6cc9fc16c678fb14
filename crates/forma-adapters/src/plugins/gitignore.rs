//! `.gitignore` for generated projects. Runs in the pre phase so later
//! plugins can append-by-overwrite if they ever need to (they declare a
//! conflict instead; this file has exactly one writer).

use forma_core::domain::{GenerationContext, Phase, Plugin, PluginError, ProjectConfig, ProjectType};

#[derive(Debug)]
pub struct GitignorePlugin;

impl Plugin for GitignorePlugin {
    fn id(&self) -> &str {
        "gitignore"
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
        let mut lines = vec!["node_modules/", "dist/", "coverage/", "*.log", ".env"];
        if ctx.config().project_type() == ProjectType::NextJs {
            lines.push(".next/");
            lines.push("out/");
        }

        let mut contents = lines.join("\n");
        contents.push('\n');
        ctx.add_file(".gitignore", contents.into_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::pipeline::resolve_policy;

    #[test]
    fn nextjs_projects_ignore_the_build_dir() {
        let config = ProjectConfig::builder()
            .project_type(ProjectType::NextJs)
            .build()
            .unwrap();
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);

        GitignorePlugin.apply(&mut ctx).unwrap();

        let body = String::from_utf8(ctx.get_file(".gitignore").unwrap().to_vec()).unwrap();
        assert!(body.contains(".next/"));
        assert!(body.contains("node_modules/"));
    }

    #[test]
    fn library_projects_do_not_mention_next() {
        let config = ProjectConfig::builder()
            .project_type(ProjectType::Library)
            .build()
            .unwrap();
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);

        GitignorePlugin.apply(&mut ctx).unwrap();

        let body = String::from_utf8(ctx.get_file(".gitignore").unwrap().to_vec()).unwrap();
        assert!(!body.contains(".next/"));
    }
}
