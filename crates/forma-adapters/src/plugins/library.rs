//! Plain TypeScript library scaffold.

use forma_core::domain::{GenerationContext, Plugin, PluginError, ProjectConfig, ProjectType};

use crate::plugins::pin;

#[derive(Debug)]
pub struct LibraryPlugin;

impl Plugin for LibraryPlugin {
    fn id(&self) -> &str {
        "library"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn applies_to(&self, config: &ProjectConfig) -> bool {
        config.project_type() == ProjectType::Library
    }

    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
        let posture = ctx.policy().version_posture;
        let name = ctx.config().project_name().unwrap_or("library");

        let package_json = format!(
            r#"{{
  "name": "{name}",
  "version": "0.1.0",
  "type": "module",
  "main": "dist/index.js",
  "types": "dist/index.d.ts",
  "scripts": {{
    "build": "tsc",
    "lint": "eslint .",
    "typecheck": "tsc --noEmit",
    "test": "node --test"
  }},
  "devDependencies": {{
    "typescript": "{ts}"
  }}
}}
"#,
            ts = pin(posture, "5", "5.8", "5.8.3"),
        );
        ctx.add_file("package.json", package_json.into_bytes());

        ctx.add_file(
            "tsconfig.json",
            br#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "nodenext",
    "moduleResolution": "nodenext",
    "declaration": true,
    "outDir": "dist",
    "strict": true
  },
  "include": ["src"]
}
"#
            .to_vec(),
        );

        ctx.add_file("src/index.ts", b"export {};\n".to_vec());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::pipeline::resolve_policy;

    #[test]
    fn emits_entry_point_and_manifest() {
        let config = ProjectConfig::builder()
            .project_type(ProjectType::Library)
            .build()
            .unwrap();
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);

        LibraryPlugin.apply(&mut ctx).unwrap();

        assert!(ctx.has_file("package.json"));
        assert!(ctx.has_file("src/index.ts"));
    }
}
