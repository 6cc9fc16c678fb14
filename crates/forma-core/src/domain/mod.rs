//! Core domain layer for Forma.
//!
//! This module contains pure data and contracts with ZERO I/O. The
//! pipeline layer orchestrates; plugins (external crates) produce bytes;
//! everything they exchange is defined here.
//!
//! ## Discipline
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: config, policy, manifest never mutate after
//!   construction
//! - **Determinism first**: every ordering that reaches the output is an
//!   explicit sort, never container iteration order

pub mod config;
pub mod context;
pub mod error;
pub mod manifest;
pub mod plugin;
pub mod policy;
pub mod value_objects;

// Re-exports for convenience
pub use config::{ConfigBuilder, ProjectConfig, ProviderSelections};
pub use context::GenerationContext;
pub use error::{DomainError, ErrorCategory};
pub use manifest::{
    Manifest, ManifestEntry, RenderResult, RenderedFile, config_hash, normalize_line_endings,
    sha256_hex,
};
pub use plugin::{Plugin, PluginError, ValidationReport};
pub use policy::{
    Policy, PolicyOverlay, ProcessControls, ProcessOverlay, RuntimeSafety, RuntimeSafetyOverlay,
};
pub use value_objects::{
    CiProvider, ConflictPolicy, PackageManager, Phase, ProjectType, StrictnessPreset,
    VersionPosture,
};
