//! Implementation of the `forma policy` command.

use forma_core::domain::{ProjectConfig, ProjectType, StrictnessPreset};
use forma_core::pipeline::resolve_policy;

use crate::{
    cli::{PolicyArgs, PresetArg},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print the effective policy for a preset as pretty JSON.
///
/// The policy depends only on the preset, so a neutral project type is
/// used for resolution.
pub fn execute(args: PolicyArgs, output: OutputManager) -> CliResult<()> {
    let preset = match args.preset {
        PresetArg::Startup => StrictnessPreset::Startup,
        PresetArg::Growth => StrictnessPreset::Growth,
        PresetArg::Enterprise => StrictnessPreset::Enterprise,
    };

    let config = ProjectConfig::builder()
        .project_type(ProjectType::Library)
        .strictness_preset(preset)
        .build()?;
    let policy = resolve_policy(&config);

    let json = serde_json::to_string_pretty(&policy).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialize policy: {e}"),
    })?;
    output.print(&json)?;
    Ok(())
}
