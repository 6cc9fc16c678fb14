//! Logging setup for the CLI process.
//!
//! `forma-core` and `forma-adapters` emit tracing events but never
//! install a subscriber; this is the one place a subscriber is built.
//! The verbosity flags pick the default level (warn; `-v` info, `-vv`
//! debug, `-vvv` trace, `--quiet` error); a `RUST_LOG` value replaces
//! the whole filter when present.

use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

/// Install the global tracing subscriber. Call once, before the first
/// tracing macro fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(default_directives(args)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// One directive per workspace crate, all at the flag-derived level.
fn default_directives(args: &GlobalArgs) -> String {
    let level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    ["forma_cli", "forma_core", "forma_adapters"]
        .map(|krate| format!("{krate}={level}"))
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        let directives = default_directives(&args(0, false));
        assert_eq!(
            directives,
            "forma_cli=warn,forma_core=warn,forma_adapters=warn"
        );
    }

    #[test]
    fn verbosity_scales_the_level() {
        assert!(default_directives(&args(1, false)).contains("forma_core=info"));
        assert!(default_directives(&args(2, false)).contains("forma_core=debug"));
        assert!(default_directives(&args(5, false)).contains("forma_core=trace"));
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert!(default_directives(&args(3, true)).contains("forma_core=error"));
    }
}
