//! Implementation of the `forma generate` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig`, run
//! the render pipeline, and write (or preview) the result. No generation
//! logic lives here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, instrument};

use forma_adapters::fs::MANIFEST_FILENAME;
use forma_adapters::{OutputWriter, builtin_registry, scan_existing};
use forma_core::domain::{
    CiProvider, PackageManager, ProjectConfig, ProjectType, StrictnessPreset,
};
use forma_core::pipeline::{Renderer, resolve_policy};

use crate::{
    cli::{CiProviderArg, GenerateArgs, PackageManagerArg, PresetArg, ProjectTypeArg},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `forma generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the target (project name + output directory)
/// 2. Assemble the core `ProjectConfig` (flags override config-file defaults)
/// 3. Resolve the policy and render through the built-in registry
/// 4. Early-exit with a preview if `--dry-run`
/// 5. Write files + manifest to disk
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: GenerateArgs, app_config: AppConfig, output: OutputManager) -> CliResult<()> {
    let run_id = uuid::Uuid::new_v4();
    debug!(run_id = %run_id, started = %chrono::Utc::now().to_rfc3339(), "generate started");

    // 1. Where the project lands and what it is called.
    let target = resolve_target(&args.name, args.out.as_deref())?;

    // 2. Assemble config (CLI flags win over forma.toml defaults)
    let config = build_config(&args, &app_config, &target.name)?;
    let policy = resolve_policy(&config);

    debug!(
        project_type = %config.project_type(),
        package_manager = %config.package_manager(),
        preset = %config.strictness_preset(),
        ci = %config.providers().ci,
        "config assembled"
    );

    // 3. Render
    let registry = builtin_registry()?;
    let existing = if args.seed_existing {
        Some(scan_existing(&target.dir)?)
    } else {
        None
    };
    let result = Renderer::new(&registry).render(&config, &policy, existing)?;

    info!(files = result.files.len(), "render finished");

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.header(&format!("Dry run: would create '{}'", target.name))?;
        for entry in &result.manifest.files {
            output.print(&format!("  {}  {}", &entry.sha256[..12], entry.path))?;
        }
        output.print("")?;
        output.print(&format!("  configHash: {}", result.manifest.config_hash))?;
        return Ok(());
    }

    // 5. Write to disk
    OutputWriter::new(args.force).write(&target.dir, &result)?;

    output.success(&format!(
        "Project '{}' created ({} files)",
        target.name,
        result.files.len()
    ))?;

    if !output.is_quiet() {
        output.info(&format!(
            "manifest recorded at {}",
            target.dir.join(MANIFEST_FILENAME).display()
        ))?;
        output.print(&format!("\nNext: cd {}", target.dir.display()))?;
    }

    Ok(())
}

// ── Target resolution ─────────────────────────────────────────────────────────

/// Where a generated project lands and what it is called.
struct Target {
    name: String,
    dir: PathBuf,
}

/// Split the NAME argument into a project name (its final path segment)
/// and a target directory, honouring `--out` when given.
fn resolve_target(raw: &str, out: Option<&Path>) -> CliResult<Target> {
    let arg = Path::new(raw);
    let name = match arg.file_name().and_then(|leaf| leaf.to_str()) {
        Some(leaf) => leaf.to_owned(),
        None => return Err(invalid_name(raw, "no usable final path segment")),
    };
    if let Some(problem) = name_problem(&name) {
        return Err(invalid_name(&name, problem));
    }

    let dir = match out {
        Some(dir) => dir.to_path_buf(),
        None => arg.to_path_buf(),
    };
    Ok(Target { name, dir })
}

/// Why `name` is unacceptable as a project name, if it is.
fn name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("it is empty")
    } else if name.starts_with('.') {
        Some("it starts with '.'")
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some("it contains characters outside letters, digits, '-', '_'")
    } else {
        None
    }
}

fn invalid_name(name: &str, reason: &str) -> CliError {
    CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    }
}

// ── Config assembly ───────────────────────────────────────────────────────────

fn build_config(
    args: &GenerateArgs,
    app_config: &AppConfig,
    project_name: &str,
) -> CliResult<ProjectConfig> {
    let mut builder = ProjectConfig::builder()
        .project_type(convert_project_type(args.project_type))
        .project_name(project_name);

    if let Some(pm) = resolve_package_manager(args, app_config)? {
        builder = builder.package_manager(pm);
    }
    if let Some(preset) = resolve_preset(args, app_config)? {
        builder = builder.strictness_preset(preset);
    }
    if let Some(ci) = resolve_ci(args, app_config)? {
        builder = builder.ci_provider(ci);
    }

    Ok(builder.build()?)
}

fn resolve_package_manager(
    args: &GenerateArgs,
    app_config: &AppConfig,
) -> CliResult<Option<PackageManager>> {
    if let Some(pm) = args.package_manager {
        return Ok(Some(convert_package_manager(pm)));
    }
    parse_default(app_config.defaults.package_manager.as_deref(), "defaults.package_manager")
}

fn resolve_preset(
    args: &GenerateArgs,
    app_config: &AppConfig,
) -> CliResult<Option<StrictnessPreset>> {
    if let Some(preset) = args.preset {
        return Ok(Some(convert_preset(preset)));
    }
    parse_default(app_config.defaults.preset.as_deref(), "defaults.preset")
}

fn resolve_ci(args: &GenerateArgs, app_config: &AppConfig) -> CliResult<Option<CiProvider>> {
    if let Some(ci) = args.ci {
        return Ok(Some(convert_ci(ci)));
    }
    parse_default(app_config.defaults.ci.as_deref(), "defaults.ci")
}

/// Parse an optional config-file default, mapping parse failures to a
/// configuration error that names the offending key.
fn parse_default<T: FromStr>(value: Option<&str>, key: &str) -> CliResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|e| CliError::ConfigError {
            message: format!("invalid value for {key}: {e}"),
        }),
    }
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_project_type(t: ProjectTypeArg) -> ProjectType {
    match t {
        ProjectTypeArg::Nextjs => ProjectType::NextJs,
        ProjectTypeArg::Fastify => ProjectType::Fastify,
        ProjectTypeArg::Library => ProjectType::Library,
    }
}

fn convert_package_manager(pm: PackageManagerArg) -> PackageManager {
    match pm {
        PackageManagerArg::Npm => PackageManager::Npm,
        PackageManagerArg::Pnpm => PackageManager::Pnpm,
        PackageManagerArg::Yarn => PackageManager::Yarn,
        PackageManagerArg::Bun => PackageManager::Bun,
    }
}

fn convert_preset(preset: PresetArg) -> StrictnessPreset {
    match preset {
        PresetArg::Startup => StrictnessPreset::Startup,
        PresetArg::Growth => StrictnessPreset::Growth,
        PresetArg::Enterprise => StrictnessPreset::Enterprise,
    }
}

fn convert_ci(ci: CiProviderArg) -> CiProvider {
    match ci {
        CiProviderArg::GithubActions => CiProvider::GithubActions,
        CiProviderArg::GitlabCi => CiProvider::GitlabCi,
        CiProviderArg::CircleCi => CiProvider::CircleCi,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
