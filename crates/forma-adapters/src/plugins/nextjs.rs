//! Next.js application scaffold.
//!
//! Emits the minimal runnable app-router project. Dependency version
//! strings follow the policy's version posture, so an enterprise render
//! pins exact releases while a startup render floats on majors.

use forma_core::domain::{
    GenerationContext, Plugin, PluginError, ProjectConfig, ProjectType, ValidationReport,
};

use crate::plugins::pin;

#[derive(Debug)]
pub struct NextJsPlugin;

impl NextJsPlugin {
    fn package_json(&self, ctx: &GenerationContext<'_>) -> String {
        let posture = ctx.policy().version_posture;
        let name = ctx.config().project_name().unwrap_or("nextjs-app");

        format!(
            r#"{{
  "name": "{name}",
  "private": true,
  "scripts": {{
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "eslint .",
    "typecheck": "tsc --noEmit",
    "test": "node --test"
  }},
  "dependencies": {{
    "next": "{next}",
    "react": "{react}",
    "react-dom": "{react}"
  }},
  "devDependencies": {{
    "typescript": "{ts}",
    "@types/react": "{types_react}"
  }}
}}
"#,
            next = pin(posture, "15", "15.3", "15.3.2"),
            react = pin(posture, "19", "19.1", "19.1.0"),
            ts = pin(posture, "5", "5.8", "5.8.3"),
            types_react = pin(posture, "19", "19.1", "19.1.2"),
        )
    }
}

impl Plugin for NextJsPlugin {
    fn id(&self) -> &str {
        "nextjs"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn applies_to(&self, config: &ProjectConfig) -> bool {
        config.project_type() == ProjectType::NextJs
    }

    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
        ctx.add_file("package.json", self.package_json(ctx).into_bytes());

        ctx.add_file(
            "tsconfig.json",
            br#"{
  "compilerOptions": {
    "target": "ES2022",
    "lib": ["dom", "dom.iterable", "esnext"],
    "module": "esnext",
    "moduleResolution": "bundler",
    "jsx": "preserve",
    "strict": true,
    "noEmit": true,
    "skipLibCheck": true
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx"],
  "exclude": ["node_modules"]
}
"#
            .to_vec(),
        );

        ctx.add_file(
            "next.config.mjs",
            b"/** @type {import('next').NextConfig} */\nconst nextConfig = {};\n\nexport default nextConfig;\n"
                .to_vec(),
        );

        ctx.add_file(
            "src/app/page.tsx",
            b"export default function Home() {\n  return <main>Hello.</main>;\n}\n".to_vec(),
        );

        Ok(())
    }

    fn validate(&self, ctx: &GenerationContext<'_>) -> ValidationReport {
        // A Next.js scaffold without a package manifest is unusable.
        if ctx.has_file("package.json") && ctx.has_file("tsconfig.json") {
            ValidationReport::valid()
        } else {
            ValidationReport::invalid(vec!["package.json or tsconfig.json missing".into()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::domain::StrictnessPreset;
    use forma_core::pipeline::resolve_policy;

    fn render_package_json(preset: StrictnessPreset) -> String {
        let config = ProjectConfig::builder()
            .project_type(ProjectType::NextJs)
            .strictness_preset(preset)
            .project_name("demo")
            .build()
            .unwrap();
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);
        NextJsPlugin.apply(&mut ctx).unwrap();
        String::from_utf8(ctx.get_file("package.json").unwrap().to_vec()).unwrap()
    }

    #[test]
    fn applies_only_to_nextjs_projects() {
        let nextjs = ProjectConfig::builder()
            .project_type(ProjectType::NextJs)
            .build()
            .unwrap();
        let library = ProjectConfig::builder()
            .project_type(ProjectType::Library)
            .build()
            .unwrap();

        assert!(NextJsPlugin.applies_to(&nextjs));
        assert!(!NextJsPlugin.applies_to(&library));
    }

    #[test]
    fn startup_floats_on_majors() {
        let body = render_package_json(StrictnessPreset::Startup);
        assert!(body.contains("\"next\": \"^15\""));
        assert!(body.contains("\"name\": \"demo\""));
    }

    #[test]
    fn enterprise_pins_exact_releases() {
        let body = render_package_json(StrictnessPreset::Enterprise);
        assert!(body.contains("\"next\": \"15.3.2\""));
        assert!(!body.contains('^'));
    }

    #[test]
    fn validation_passes_after_apply() {
        let config = ProjectConfig::builder()
            .project_type(ProjectType::NextJs)
            .build()
            .unwrap();
        let policy = resolve_policy(&config);
        let mut ctx = GenerationContext::new(&config, &policy);

        NextJsPlugin.apply(&mut ctx).unwrap();
        assert!(NextJsPlugin.validate(&ctx).valid);
    }
}
