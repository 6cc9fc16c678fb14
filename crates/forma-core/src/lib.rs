//! Forma Core - Deterministic Generation Pipeline
//!
//! This crate provides the domain and pipeline layers for the Forma
//! project scaffolding tool. It is pure computation: no filesystem, no
//! network, no subscriber setup. The CLI and adapter crates feed it a
//! validated configuration and collect the rendered output.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           forma-cli (CLI)               │
//! │   (argument parsing, output, config)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Pipeline (Orchestration)        │
//! │  (Renderer, GraphResolver, Scheduler,   │
//! │   PolicyResolver, PluginRegistry)       │
//! └──────────────────┬──────────────────────┘
//!                    │ drives
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Plugin contract (trait)          │
//! │    implemented by forma-adapters and    │
//! │        third-party stack crates         │
//! └──────────────────┬──────────────────────┘
//!                    │ writes into
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Data)          │
//! │ (ProjectConfig, Policy, Context,        │
//! │  Manifest, RenderResult)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use forma_core::{
//!     domain::{ProjectConfig, ProjectType},
//!     pipeline::{PluginRegistry, Renderer, resolve_policy},
//! };
//!
//! let config = ProjectConfig::builder()
//!     .project_type(ProjectType::NextJs)
//!     .build()
//!     .unwrap();
//! let policy = resolve_policy(&config);
//!
//! let registry = PluginRegistry::new(); // register plugins here
//! let result = Renderer::new(&registry)
//!     .render(&config, &policy, None)
//!     .unwrap();
//! println!("{} files", result.files.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export pipeline layer (orchestration logic)
pub mod pipeline;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        ConflictPolicy, GenerationContext, Manifest, ManifestEntry, Phase, Plugin, PluginError,
        Policy, ProjectConfig, ProjectType, RenderResult, RenderedFile, StrictnessPreset,
        ValidationReport,
    };
    pub use crate::error::{FormaError, FormaResult};
    pub use crate::pipeline::{PluginRegistry, Renderer, resolve_policy};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
