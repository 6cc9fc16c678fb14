//! Implementation of the `forma completions` command.

use clap::CommandFactory;
use clap_complete::{Shell as ClapShell, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Write a completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "forma", &mut std::io::stdout());
    Ok(())
}
