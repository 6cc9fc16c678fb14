//! CODEOWNERS generation for policies that require review ownership.
//!
//! Post phase: ownership is recorded after the content plugins have
//! decided what exists. Applies only when the resolved policy turns on
//! `require_code_owners` (the enterprise tier).

use forma_core::domain::{GenerationContext, Phase, Plugin, PluginError, ProjectConfig};
use forma_core::pipeline::resolve_policy;

#[derive(Debug)]
pub struct CodeOwnersPlugin;

impl Plugin for CodeOwnersPlugin {
    fn id(&self) -> &str {
        "codeowners"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn phase(&self) -> Phase {
        Phase::Post
    }

    fn applies_to(&self, config: &ProjectConfig) -> bool {
        resolve_policy(config).process.require_code_owners
    }

    fn apply(&self, ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
        let mut body = String::from("* @platform-team\n");
        if ctx.policy().requires_check("audit") {
            body.push_str("/.github/ @platform-team @security-team\n");
        }
        ctx.add_file(".github/CODEOWNERS", body.into_bytes());
        Ok(())
    }
}
