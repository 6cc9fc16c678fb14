//! Infrastructure adapters for Forma.
//!
//! This crate contains the pieces the core deliberately stays ignorant
//! of: the built-in plugins that produce actual file content, and the
//! filesystem adapters that move bytes between disk and the pipeline.

pub mod error;
pub mod fs;
pub mod plugins;

// Re-export commonly used adapters
pub use error::AdapterError;
pub use fs::{Filesystem, LocalFilesystem, OutputWriter, scan_existing};
pub use plugins::builtin_registry;
