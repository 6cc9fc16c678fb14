//! Application configuration for the CLI itself.
//!
//! [`AppConfig`] holds user defaults for generation flags and output
//! behaviour. It is loaded once at startup and stays in the CLI layer;
//! the core crate only ever sees the assembled `ProjectConfig`.
//!
//! Sources, strongest first: CLI flags (applied at the call-site),
//! `FORMA_*` environment variables (`__` separates sections), the
//! config file (`--config FILE`, else `forma.toml` in the working
//! directory), and built-in defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generated projects.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    pub package_manager: Option<String>,
    pub preset: Option<String>,
    pub ci: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`, or
    /// `None` to probe `forma.toml` in the current directory.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone())),
            None => builder.add_source(config::File::with_name("forma").required(false)),
        };
        builder = builder.add_source(
            config::Environment::with_prefix("FORMA")
                .prefix_separator("_")
                .separator("__"),
        );

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `forma.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "forma", "forma")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("forma.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.preset.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn config_path_is_nonempty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn file_values_are_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[defaults]\npreset = \"growth\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.preset.as_deref(), Some("growth"));
    }
}
