//! CLI-layer errors: everything that can stop a command, with the
//! message, suggestions, and exit code decided in one place.

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

use forma_adapters::AdapterError;
use forma_core::error::{ErrorCategory, FormaError};
use forma_core::pipeline::PipelineError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// User input failed validation outside clap (values clap cannot check).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The NAME argument cannot be used as a project name.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// A configuration file or environment override could not be used.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Anything the pipeline refused: bad config, cycles, conflicts,
    /// plugin failures. Wrapped so suggestions and exit codes can be
    /// derived from the core error's own category.
    #[error("Generation failed: {0}")]
    Core(#[from] FormaError),

    /// Filesystem adapter failure while scanning or writing output.
    #[error("Output failed: {0}")]
    Adapter(#[from] AdapterError),

    /// Any other I/O failure.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<forma_core::domain::DomainError> for CliError {
    fn from(err: forma_core::domain::DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// What the user can do about it; printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Input was rejected: {message}"),
                "See --help for accepted values".into(),
            ],

            Self::InvalidProjectName { name, reason } => vec![
                format!("'{name}' cannot be used: {reason}"),
                "Names may use letters, digits, hyphens, and underscores".into(),
                "Examples: my-app, my_api, app123".into(),
            ],

            Self::ConfigError { message } => vec![
                format!("Configuration problem: {message}"),
                "Check forma.toml for syntax errors".into(),
            ],

            Self::Core(e) => e.suggestions(),
            Self::Adapter(e) => e.suggestions(),

            Self::IoError { .. } => {
                vec!["Check filesystem permissions and available space".into()]
            }
        }
    }

    /// Exit code for this error (see the table in `main.rs`).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput { .. } | Self::InvalidProjectName { .. } => 2,
            Self::ConfigError { .. } => 4,
            // A plugin the render needs is absent: "not found", not bad input.
            Self::Core(FormaError::Pipeline(
                PipelineError::UnknownPlugin { .. } | PipelineError::MissingDependency { .. },
            )) => 3,
            Self::Core(e) => match e.category() {
                ErrorCategory::Validation => 2,
                ErrorCategory::Internal => 1,
            },
            Self::Adapter(AdapterError::NonEmptyTarget { .. }) => 2,
            Self::Adapter(_) | Self::IoError { .. } => 1,
        }
    }

    /// Emit a structured log event for this error.
    pub fn log(&self) {
        error!(error = %self, exit_code = self.exit_code(), "command failed");
    }

    /// Render message plus suggestions for stderr.
    pub fn render(&self, colored: bool) -> String {
        let mut out = if colored {
            format!("{} {self}\n", "error:".red().bold())
        } else {
            format!("error: {self}\n")
        };

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            for s in suggestions {
                if colored {
                    out.push_str(&format!("  {}\n", s.dimmed()));
                } else {
                    out.push_str(&format!("  {s}\n"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_exit_2() {
        let err = CliError::InvalidInput {
            message: "bad".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn config_errors_exit_4() {
        let err = CliError::ConfigError {
            message: "broken toml".into(),
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn missing_plugin_exits_3() {
        let err: CliError = PipelineError::MissingDependency {
            plugin: "a".into(),
            dependency: "b".into(),
        }
        .into();
        assert_eq!(err.exit_code(), 3);

        let err: CliError = PipelineError::UnknownPlugin { id: "ghost".into() }.into();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn other_pipeline_validation_errors_exit_2() {
        let err: CliError = PipelineError::FileConflict {
            path: "package.json".into(),
            plugins: vec!["a".into(), "b".into()],
        }
        .into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn render_includes_message_and_suggestions() {
        let err = CliError::InvalidProjectName {
            name: "..".into(),
            reason: "it starts with '.'".into(),
        };
        let rendered = err.render(false);
        assert!(rendered.starts_with("error:"));
        assert!(rendered.contains("starts with"));
        assert!(rendered.contains("my-app"));
    }
}
