//! Project configuration: the validated, immutable input to a render.
//!
//! A [`ProjectConfig`] is produced by the CLI (or any other delivery
//! surface) through [`ConfigBuilder`]; the pipeline only ever reads it.
//! Serialization uses camelCase keys so the canonical form that feeds the
//! config hash matches the manifest wire shape.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{CiProvider, PackageManager, ProjectType, StrictnessPreset};

/// Immutable, validated project configuration.
///
/// Construct via [`ProjectConfig::builder`]. Fields are private so a value
/// that exists is a value that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    project_type: ProjectType,
    package_manager: PackageManager,
    strictness_preset: StrictnessPreset,
    providers: ProviderSelections,
    project_name: Option<String>,
}

/// External providers the generated project integrates with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSelections {
    pub ci: CiProvider,
}

impl ProjectConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn strictness_preset(&self) -> StrictnessPreset {
        self.strictness_preset
    }

    pub fn providers(&self) -> &ProviderSelections {
        &self.providers
    }

    /// Project name, when the caller supplied one. Plugins fall back to a
    /// neutral default for content that needs a name.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }
}

impl std::fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({})",
            self.project_type, self.package_manager, self.strictness_preset
        )
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Builder for [`ProjectConfig`].
///
/// Only `project_type` is mandatory; everything else has a sensible
/// default (npm, startup preset, GitHub Actions).
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    project_type: Option<ProjectType>,
    package_manager: Option<PackageManager>,
    strictness_preset: Option<StrictnessPreset>,
    ci: Option<CiProvider>,
    project_name: Option<String>,
}

impl ConfigBuilder {
    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = Some(package_manager);
        self
    }

    pub fn strictness_preset(mut self, preset: StrictnessPreset) -> Self {
        self.strictness_preset = Some(preset);
        self
    }

    pub fn ci_provider(mut self, ci: CiProvider) -> Self {
        self.ci = Some(ci);
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let project_type = self.project_type.ok_or(DomainError::MissingRequiredField {
            field: "projectType",
        })?;

        Ok(ProjectConfig {
            project_type,
            package_manager: self.package_manager.unwrap_or(PackageManager::Npm),
            strictness_preset: self.strictness_preset.unwrap_or(StrictnessPreset::Startup),
            providers: ProviderSelections {
                ci: self.ci.unwrap_or(CiProvider::GithubActions),
            },
            project_name: self.project_name,
        })
    }
}
