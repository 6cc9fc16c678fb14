//! Fastify service scaffold: package manifest, tsconfig, entry server.

use forma_core::domain::{GenerationContext, Plugin, PluginError, ProjectConfig, ProjectType};

use crate::plugins::pin;

#[derive(Debug)]
pub struct FastifyPlugin;

impl Plugin for FastifyPlugin {
    fn id(&self) -> &str {
        "fastify"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn applies_to(&self, config: &ProjectConfig) -> bool {
        config.project_type() == ProjectType::Fastify
    }

    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
        let posture = ctx.policy().version_posture;
        let name = ctx.config().project_name().unwrap_or("fastify-service");

        let package_json = format!(
            r#"{{
  "name": "{name}",
  "private": true,
  "type": "module",
  "scripts": {{
    "dev": "tsx watch src/server.ts",
    "build": "tsc",
    "start": "node dist/server.js",
    "lint": "eslint .",
    "typecheck": "tsc --noEmit",
    "test": "node --test"
  }},
  "dependencies": {{
    "fastify": "{fastify}"
  }},
  "devDependencies": {{
    "typescript": "{ts}",
    "tsx": "{tsx}"
  }}
}}
"#,
            fastify = pin(posture, "5", "5.3", "5.3.3"),
            ts = pin(posture, "5", "5.8", "5.8.3"),
            tsx = pin(posture, "4", "4.19", "4.19.4"),
        );
        ctx.add_file("package.json", package_json.into_bytes());

        ctx.add_file(
            "tsconfig.json",
            br#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "nodenext",
    "moduleResolution": "nodenext",
    "outDir": "dist",
    "strict": true,
    "skipLibCheck": true
  },
  "include": ["src"]
}
"#
            .to_vec(),
        );

        ctx.add_file(
            "src/server.ts",
            br#"import Fastify from "fastify";

const app = Fastify({ logger: true });

app.get("/healthz", async () => ({ ok: true }));

app.listen({ port: 3000, host: "0.0.0.0" }).catch((err) => {
  app.log.error(err);
  process.exit(1);
});
"#
            .to_vec(),
        );

        Ok(())
    }
}
