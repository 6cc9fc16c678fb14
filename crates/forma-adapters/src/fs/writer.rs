//! Materialize a [`RenderResult`] onto the filesystem.
//!
//! The pipeline's non-goal holds here too: nothing is merged or
//! patched. The writer either refuses a non-empty target or writes the
//! rendered bytes as-is, then records the manifest alongside them.

use std::path::Path;

use tracing::{debug, info};

use forma_core::domain::RenderResult;

use crate::error::AdapterError;
use crate::fs::{Filesystem, LocalFilesystem, map_io_error};

/// Name of the manifest file written next to the generated output.
pub const MANIFEST_FILENAME: &str = "forma.manifest.json";

/// Writes rendered files and the manifest under a root directory.
pub struct OutputWriter {
    fs: Box<dyn Filesystem>,
    force: bool,
}

impl OutputWriter {
    pub fn new(force: bool) -> Self {
        Self {
            fs: Box::new(LocalFilesystem::new()),
            force,
        }
    }

    /// Writer over an injected filesystem (tests, dry-run hosts).
    pub fn with_filesystem(fs: Box<dyn Filesystem>, force: bool) -> Self {
        Self { fs, force }
    }

    /// Write every rendered file plus the manifest under `root`.
    ///
    /// Refuses a non-empty `root` unless the writer was built with
    /// `force`; generation never merges into existing content.
    pub fn write(&self, root: &Path, result: &RenderResult) -> Result<(), AdapterError> {
        let occupied = self
            .fs
            .is_occupied(root)
            .map_err(|e| map_io_error(root, "inspect target directory", e))?;
        if occupied && !self.force {
            return Err(AdapterError::NonEmptyTarget {
                path: root.to_path_buf(),
            });
        }

        self.fs
            .create_dir_all(root)
            .map_err(|e| map_io_error(root, "create output root", e))?;

        for file in &result.files {
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, "create directory", e))?;
            }
            self.fs
                .write_file(&path, &file.contents)
                .map_err(|e| map_io_error(&path, "write file", e))?;
            debug!(path = %path.display(), bytes = file.contents.len(), "file written");
        }

        let manifest_bytes = serde_json::to_vec_pretty(&result.manifest).map_err(|e| {
            AdapterError::ManifestSerialization {
                reason: e.to_string(),
            }
        })?;
        let manifest_path = root.join(MANIFEST_FILENAME);
        self.fs
            .write_file(&manifest_path, &manifest_bytes)
            .map_err(|e| map_io_error(&manifest_path, "write manifest", e))?;

        info!(
            files = result.files.len(),
            root = %root.display(),
            "output written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFilesystem;
    use forma_core::domain::{Manifest, RenderedFile};

    fn result_with_one_file() -> RenderResult {
        RenderResult {
            files: vec![RenderedFile {
                path: "src/index.ts".into(),
                contents: b"export {};\n".to_vec(),
            }],
            manifest: Manifest {
                generator_version: "0.1.0".into(),
                policy_version: "2025.08".into(),
                config_hash: "00".into(),
                files: vec![],
            },
        }
    }

    #[test]
    fn refuses_occupied_target_without_force() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_occupied().returning(|_| Ok(true));

        let writer = OutputWriter::with_filesystem(Box::new(fs), false);
        let err = writer
            .write(Path::new("/out"), &result_with_one_file())
            .unwrap_err();
        assert!(matches!(err, AdapterError::NonEmptyTarget { .. }));
    }

    #[test]
    fn force_overrides_occupied_target() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_occupied().returning(|_| Ok(true));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let writer = OutputWriter::with_filesystem(Box::new(fs), true);
        writer
            .write(Path::new("/out"), &result_with_one_file())
            .unwrap();
    }

    #[test]
    fn writes_each_file_and_the_manifest() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_occupied().returning(|_| Ok(false));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // One rendered file + the manifest.
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let writer = OutputWriter::with_filesystem(Box::new(fs), false);
        writer
            .write(Path::new("/out"), &result_with_one_file())
            .unwrap();
    }

    #[test]
    fn io_failures_surface_as_filesystem_errors() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_occupied().returning(|_| Ok(false));
        fs.expect_create_dir_all()
            .returning(|_| Err(std::io::Error::other("denied")));

        let writer = OutputWriter::with_filesystem(Box::new(fs), false);
        let err = writer
            .write(Path::new("/out"), &result_with_one_file())
            .unwrap_err();
        assert!(matches!(err, AdapterError::Filesystem { .. }));
    }
}
