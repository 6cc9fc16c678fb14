//! Implementation of the `forma plugins` command.

use forma_adapters::builtin_registry;
use forma_core::domain::{Plugin, ProjectConfig, ProjectType};

use crate::{
    cli::{PluginsArgs, ProjectTypeArg},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// List every registered plugin: id, version, phase, conflict policy.
/// With `--type`, marks which plugins would apply to that project type.
/// With `--output-format json`, emits the same data machine-readably.
pub fn execute(args: PluginsArgs, output: OutputManager) -> CliResult<()> {
    let registry = builtin_registry()?;

    let probe: Option<ProjectConfig> = match args.project_type {
        Some(t) => Some(
            ProjectConfig::builder()
                .project_type(match t {
                    ProjectTypeArg::Nextjs => ProjectType::NextJs,
                    ProjectTypeArg::Fastify => ProjectType::Fastify,
                    ProjectTypeArg::Library => ProjectType::Library,
                })
                .build()?,
        ),
        None => None,
    };

    let mut plugins = registry.all();
    plugins.sort_by(|a, b| a.id().cmp(b.id()));

    if output.wants_json() {
        return print_json(&plugins, probe.as_ref(), &output);
    }

    output.header(&format!("{} registered plugins", plugins.len()))?;
    for plugin in plugins {
        let deps = plugin.dependencies();
        let mut line = format!(
            "  {:<16} {:<8} phase={:<7} conflict={}",
            plugin.id(),
            plugin.version(),
            plugin.phase().to_string(),
            plugin.conflict_policy(),
        );
        if !deps.is_empty() {
            line.push_str(&format!("  needs: {}", deps.join(", ")));
        }
        if let Some(config) = &probe {
            if plugin.applies_to(config) {
                line.push_str("  [applies]");
            }
        }
        output.print(&line)?;
    }

    Ok(())
}

fn print_json(
    plugins: &[&dyn Plugin],
    probe: Option<&ProjectConfig>,
    output: &OutputManager,
) -> CliResult<()> {
    let rows: Vec<serde_json::Value> = plugins
        .iter()
        .map(|plugin| {
            serde_json::json!({
                "id": plugin.id(),
                "version": plugin.version(),
                "phase": plugin.phase().as_str(),
                "conflictPolicy": plugin.conflict_policy().as_str(),
                "dependencies": plugin.dependencies(),
                "applies": probe.map(|config| plugin.applies_to(config)),
            })
        })
        .collect();

    let body = serde_json::to_string_pretty(&rows).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialize plugin list: {e}"),
    })?;
    output.print(&body)?;
    Ok(())
}
