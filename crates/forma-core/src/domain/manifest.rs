//! Render output types and the hashing that proves what was produced.
//!
//! The manifest is the record downstream tooling verifies against:
//! generator/policy versions, a canonical hash of the input config, and
//! one content hash per output file, sorted ascending by path.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::config::ProjectConfig;
use crate::domain::error::DomainError;

/// Signed record of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub generator_version: String,
    pub policy_version: String,
    /// Sha-256 hex of the canonical (sorted-key) config serialization.
    pub config_hash: String,
    /// One entry per output file, sorted ascending by path.
    pub files: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    pub sha256: String,
}

/// A single normalized output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub contents: Vec<u8>,
}

/// The sole value returned by the pipeline: sorted file map + manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Output files, sorted ascending by path.
    pub files: Vec<RenderedFile>,
    pub manifest: Manifest,
}

impl RenderResult {
    pub fn file(&self, path: &str) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

// ── Hashing & normalization ──────────────────────────────────────────────────

/// Lowercase sha-256 hex digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Stable hash of a config: sha-256 over its canonical JSON form.
///
/// Round-tripping through `serde_json::Value` yields sorted object keys
/// (serde_json's default map is ordered), so two structurally equal
/// configs hash identically regardless of how they were built.
pub fn config_hash(config: &ProjectConfig) -> Result<String, DomainError> {
    let value = serde_json::to_value(config).map_err(|e| DomainError::Canonicalization {
        message: e.to_string(),
    })?;
    let canonical = serde_json::to_string(&value).map_err(|e| DomainError::Canonicalization {
        message: e.to_string(),
    })?;
    Ok(sha256_hex(canonical.as_bytes()))
}

/// Rewrite every CRLF and every lone CR to a single LF.
///
/// Runs on every output buffer before hashing, so manifests never differ
/// across platforms that disagree about line endings.
pub fn normalize_line_endings(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\r' {
            out.push(b'\n');
            if i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
                i += 1;
            }
        } else {
            out.push(bytes[i]);
        }
        i += 1;
    }
    out
}
