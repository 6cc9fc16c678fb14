//! Terminal output for command results.
//!
//! Every normal-path line the CLI prints funnels through
//! [`OutputManager`], so quiet mode, colour handling, and format
//! resolution live in one place. Errors deliberately bypass it: they are
//! rendered onto stderr by `main` from the structured [`crate::error::CliError`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Visual tone of a status line.
enum Tone {
    Success,
    Info,
}

/// Writes command output to stdout under the resolved format settings.
pub struct OutputManager {
    term: Term,
    colored: bool,
    json: bool,
    quiet: bool,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            term: Term::stdout(),
            colored: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            json: format == OutputFormat::Json,
            quiet: args.quiet,
        }
    }

    /// Plain line; dropped in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match (tone, self.colored) {
            (Tone::Success, true) => format!("{} {msg}", "\u{2713}".green().bold()),
            (Tone::Success, false) => format!("\u{2713} {msg}"),
            (Tone::Info, true) => format!("{} {msg}", "\u{2139}".blue().bold()),
            (Tone::Info, false) => format!("\u{2139} {msg}"),
        };
        self.term.write_line(&line)
    }

    /// Section header; bold when colour is on.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.colored {
            self.term.write_line(&text.bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    /// `true` when `--output-format json` was requested; commands that
    /// support it emit machine-readable output instead of tables.
    pub fn wants_json(&self) -> bool {
        self.json
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
