//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "forma",
    bin_name = "forma",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Deterministic project generation",
    long_about = "Forma renders a project from a validated configuration and a \
                  resolved policy, and records a manifest proving what was \
                  produced and why.",
    after_help = "EXAMPLES:\n\
        \x20 forma generate my-app --type nextjs --preset startup\n\
        \x20 forma generate my-api --type fastify --package-manager pnpm --ci gitlab\n\
        \x20 forma policy --preset enterprise\n\
        \x20 forma plugins",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project.
    #[command(
        visible_alias = "g",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 forma generate my-app --type nextjs\n\
            \x20 forma generate my-api --type fastify --preset growth --dry-run\n\
            \x20 forma generate my-lib --type library --package-manager yarn"
    )]
    Generate(GenerateArgs),

    /// List registered plugins.
    #[command(
        visible_alias = "ls",
        about = "List registered plugins",
        after_help = "EXAMPLES:\n\
            \x20 forma plugins\n\
            \x20 forma plugins --type nextjs"
    )]
    Plugins(PluginsArgs),

    /// Show the effective policy for a preset.
    #[command(
        about = "Print a resolved policy as JSON",
        after_help = "EXAMPLES:\n\
            \x20 forma policy --preset startup\n\
            \x20 forma policy --preset enterprise"
    )]
    Policy(PolicyArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 forma completions bash > ~/.local/share/bash-completion/completions/forma\n\
            \x20 forma completions zsh  > ~/.zfunc/_forma"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `forma generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project name or path. A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Project type.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub project_type: ProjectTypeArg,

    /// Package manager.
    #[arg(
        short = 'p',
        long = "package-manager",
        value_name = "PM",
        value_enum,
        help = "Package manager"
    )]
    pub package_manager: Option<PackageManagerArg>,

    /// Strictness preset.
    #[arg(
        long = "preset",
        value_name = "PRESET",
        value_enum,
        help = "Strictness preset"
    )]
    pub preset: Option<PresetArg>,

    /// CI provider.
    #[arg(long = "ci", value_name = "PROVIDER", value_enum, help = "CI provider")]
    pub ci: Option<CiProviderArg>,

    /// Target directory; the project name stays NAME.
    #[arg(
        long = "out",
        value_name = "DIR",
        help = "Output directory (defaults to ./NAME)"
    )]
    pub out: Option<PathBuf>,

    /// Seed the render with files already present at the target, so
    /// plugins can skip what exists instead of overwriting it.
    #[arg(long = "seed-existing", help = "Expose existing target files to plugins")]
    pub seed_existing: bool,

    /// Write into a non-empty directory (existing files may be overwritten).
    #[arg(long = "force", help = "Write into a non-empty directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── plugins ───────────────────────────────────────────────────────────────────

/// Arguments for `forma plugins`.
#[derive(Debug, Args)]
pub struct PluginsArgs {
    /// Mark which plugins would apply to this project type.
    #[arg(short = 't', long = "type", value_enum, help = "Filter by project type")]
    pub project_type: Option<ProjectTypeArg>,
}

// ── policy ────────────────────────────────────────────────────────────────────

/// Arguments for `forma policy`.
#[derive(Debug, Args)]
pub struct PolicyArgs {
    /// Preset to resolve.
    #[arg(
        long = "preset",
        value_enum,
        default_value = "startup",
        help = "Strictness preset"
    )]
    pub preset: PresetArg,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `forma completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported project types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectTypeArg {
    #[value(alias = "next")]
    Nextjs,
    Fastify,
    #[value(alias = "lib")]
    Library,
}

impl std::fmt::Display for ProjectTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nextjs => write!(f, "nextjs"),
            Self::Fastify => write!(f, "fastify"),
            Self::Library => write!(f, "library"),
        }
    }
}

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManagerArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl std::fmt::Display for PackageManagerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Npm => write!(f, "npm"),
            Self::Pnpm => write!(f, "pnpm"),
            Self::Yarn => write!(f, "yarn"),
            Self::Bun => write!(f, "bun"),
        }
    }
}

/// Strictness presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PresetArg {
    Startup,
    Growth,
    Enterprise,
}

impl std::fmt::Display for PresetArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Startup => write!(f, "startup"),
            Self::Growth => write!(f, "growth"),
            Self::Enterprise => write!(f, "enterprise"),
        }
    }
}

/// CI providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CiProviderArg {
    #[value(name = "github-actions", alias = "github")]
    GithubActions,
    #[value(name = "gitlab-ci", alias = "gitlab")]
    GitlabCi,
    #[value(name = "circleci", alias = "circle")]
    CircleCi,
}

impl std::fmt::Display for CiProviderArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GithubActions => write!(f, "github-actions"),
            Self::GitlabCi => write!(f, "gitlab-ci"),
            Self::CircleCi => write!(f, "circleci"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "forma", "generate", "my-app", "--type", "nextjs", "--preset", "startup",
        ]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn nextjs_alias() {
        let cli = Cli::parse_from(["forma", "generate", "x", "-t", "next"]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.project_type, ProjectTypeArg::Nextjs);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn ci_provider_aliases() {
        let cli = Cli::parse_from(["forma", "generate", "x", "-t", "library", "--ci", "gitlab"]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.ci, Some(CiProviderArg::GitlabCi));
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["forma", "--quiet", "--verbose", "plugins"]);
        assert!(result.is_err());
    }

    #[test]
    fn policy_preset_defaults_to_startup() {
        let cli = Cli::parse_from(["forma", "policy"]);
        if let Commands::Policy(args) = cli.command {
            assert_eq!(args.preset, PresetArg::Startup);
        } else {
            panic!("expected Policy command");
        }
    }
}
