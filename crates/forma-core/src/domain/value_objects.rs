//! Domain value objects: project/config enums and plugin-contract vocabulary.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Which plugins react to
//! which values is decided by the plugins themselves via `applies_to`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ──────────────────────────────────────────────────────────────

/// The kind of project being scaffolded.
///
/// To add a new project type: add a variant here, then ship (or install) a
/// plugin whose `applies_to` selects it. No other files change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    NextJs,
    Fastify,
    Library,
}

impl ProjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NextJs => "nextjs",
            Self::Fastify => "fastify",
            Self::Library => "library",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nextjs" | "next" => Ok(Self::NextJs),
            "fastify" => Ok(Self::Fastify),
            "library" | "lib" => Ok(Self::Library),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown project type: {other}"
            ))),
        }
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// Package manager the generated project is set up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Lockfile name this manager maintains.
    pub const fn lockfile(&self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Pnpm => "pnpm-lock.yaml",
            Self::Yarn => "yarn.lock",
            Self::Bun => "bun.lockb",
        }
    }

    /// Prefix for invoking a package.json script.
    pub const fn run_command(&self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Pnpm => "pnpm run",
            Self::Yarn => "yarn",
            Self::Bun => "bun run",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown package manager: {other}"
            ))),
        }
    }
}

// ── StrictnessPreset ─────────────────────────────────────────────────────────

/// Strictness tier selecting which policy overlay applies.
///
/// Tiers are ordered: each one requires a superset of the checks below it
/// and a tighter version posture (see `pipeline::policy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrictnessPreset {
    Startup,
    Growth,
    Enterprise,
}

impl StrictnessPreset {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Growth => "growth",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for StrictnessPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrictnessPreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "startup" => Ok(Self::Startup),
            "growth" | "scaleup" => Ok(Self::Growth),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown strictness preset: {other}"
            ))),
        }
    }
}

// ── CiProvider ───────────────────────────────────────────────────────────────

/// Continuous-integration provider a project targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CiProvider {
    GithubActions,
    GitlabCi,
    CircleCi,
}

impl CiProvider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GithubActions => "github-actions",
            Self::GitlabCi => "gitlab-ci",
            Self::CircleCi => "circleci",
        }
    }
}

impl fmt::Display for CiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CiProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github-actions" | "github" => Ok(Self::GithubActions),
            "gitlab-ci" | "gitlab" => Ok(Self::GitlabCi),
            "circleci" | "circle" => Ok(Self::CircleCi),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown ci provider: {other}"
            ))),
        }
    }
}

// ── VersionPosture ───────────────────────────────────────────────────────────

/// How tightly generated dependency versions are pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionPosture {
    LatestMajor,
    PinnedMinor,
    PinnedExact,
}

impl VersionPosture {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LatestMajor => "latest-major",
            Self::PinnedMinor => "pinned-minor",
            Self::PinnedExact => "pinned-exact",
        }
    }
}

impl fmt::Display for VersionPosture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Phase ────────────────────────────────────────────────────────────────────

/// Fixed execution stage of a plugin within one render.
///
/// Phases execute strictly in declaration order: `pre`, `render`, `post`,
/// `ci`. Within a phase, plugins run in ascending-id order; only
/// cross-phase ordering is something a plugin author can rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Pre,
    Render,
    Post,
    Ci,
}

impl Phase {
    /// All phases, in execution order.
    pub const ALL: [Phase; 4] = [Phase::Pre, Phase::Render, Phase::Post, Phase::Ci];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Render => "render",
            Self::Post => "post",
            Self::Ci => "ci",
        }
    }

    /// Position within [`Phase::ALL`]; used for bucket indexing.
    pub const fn index(&self) -> usize {
        match self {
            Self::Pre => 0,
            Self::Render => 1,
            Self::Post => 2,
            Self::Ci => 3,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Render
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" => Ok(Self::Pre),
            "render" => Ok(Self::Render),
            "post" => Ok(Self::Post),
            "ci" => Ok(Self::Ci),
            other => Err(DomainError::InvalidConfig(format!("unknown phase: {other}"))),
        }
    }
}

// ── ConflictPolicy ───────────────────────────────────────────────────────────

/// Per-plugin declaration of how to treat another plugin writing the same
/// output path.
///
/// `Error` aborts the whole render. `LastWins` tolerates the overwrite:
/// when every contributor to a path declares it, the retained content is
/// whatever the last `add_file` in phase-then-id execution order stored.
/// There is no explicit winner selection beyond that write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    Error,
    LastWins,
}

impl ConflictPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::LastWins => "last-wins",
        }
    }
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self::Error
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
