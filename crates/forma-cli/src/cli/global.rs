//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`], so `forma -v generate ...` and
//! `forma generate -v ...` both work.

use std::path::PathBuf;

use clap::Args;

/// Arguments accepted on any `forma` invocation.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise log verbosity; repeat for more detail.
    ///
    /// `-v` info, `-vv` debug, `-vvv` trace. Without it only warnings
    /// and errors are logged. Mutually exclusive with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Drop everything except errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Never emit ANSI colour codes. Also honoured via the `NO_COLOR`
    /// environment variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit configuration file instead of the default lookup.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How results are rendered.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI renders its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Styled for humans.
    Human,
    /// Unstyled text.
    Plain,
    /// Machine-readable JSON where a command supports it.
    Json,
}
