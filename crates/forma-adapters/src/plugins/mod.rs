//! Built-in generation plugins.
//!
//! These are the "stack/provider packages" of a default Forma install.
//! Each one is an ordinary [`Plugin`] implementation; the pipeline treats
//! them exactly like third-party plugins. [`builtin_registry`] is the
//! single entry point that wires them all into a fresh registry.

use forma_core::domain::{Plugin, VersionPosture};
use forma_core::pipeline::{PipelineError, PluginRegistry};

pub mod ci;
pub mod codeowners;
pub mod fastify;
pub mod gitignore;
pub mod library;
pub mod lint;
pub mod nextjs;
pub mod package_manager;

pub use ci::CiWorkflowPlugin;
pub use codeowners::CodeOwnersPlugin;
pub use fastify::FastifyPlugin;
pub use gitignore::GitignorePlugin;
pub use library::LibraryPlugin;
pub use lint::LintPlugin;
pub use nextjs::NextJsPlugin;
pub use package_manager::PackageManagerPlugin;

/// All built-in plugins, boxed for registration.
pub fn all_plugins() -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(GitignorePlugin),
        Box::new(PackageManagerPlugin),
        Box::new(NextJsPlugin),
        Box::new(FastifyPlugin),
        Box::new(LibraryPlugin),
        Box::new(LintPlugin),
        Box::new(CiWorkflowPlugin),
        Box::new(CodeOwnersPlugin),
    ]
}

/// A fresh registry with every built-in plugin registered.
pub fn builtin_registry() -> Result<PluginRegistry, PipelineError> {
    let mut registry = PluginRegistry::new();
    for plugin in all_plugins() {
        registry.register(plugin)?;
    }
    Ok(registry)
}

/// Render a dependency version string under the policy's version posture.
///
/// `major` is the floating major ("15"), `minor` the pinned minor
/// ("15.3"), `exact` the fully pinned release ("15.3.2").
pub(crate) fn pin(posture: VersionPosture, major: &str, minor: &str, exact: &str) -> String {
    match posture {
        VersionPosture::LatestMajor => format!("^{major}"),
        VersionPosture::PinnedMinor => format!("~{minor}"),
        VersionPosture::PinnedExact => exact.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_registers_everything() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.len(), all_plugins().len());
        assert!(registry.get("nextjs").is_some());
        assert!(registry.get("ci").is_some());
    }

    #[test]
    fn builtin_ids_are_unique() {
        // builtin_registry() would fail on a duplicate; make the property
        // explicit anyway.
        let mut ids: Vec<String> = all_plugins().iter().map(|p| p.id().to_owned()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn pin_follows_posture() {
        assert_eq!(pin(VersionPosture::LatestMajor, "15", "15.3", "15.3.2"), "^15");
        assert_eq!(pin(VersionPosture::PinnedMinor, "15", "15.3", "15.3.2"), "~15.3");
        assert_eq!(pin(VersionPosture::PinnedExact, "15", "15.3", "15.3.2"), "15.3.2");
    }
}
