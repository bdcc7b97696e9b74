// File: src/config.rs
// Purpose: Compiler configuration parsing from trellis.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Compiler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub conflicts: MergeOptions,
}

/// How identifiers are interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Leading identifier component discarded before segmenting (default: "app")
    #[serde(default = "default_root_prefix")]
    pub root_prefix: String,
}

/// What to do when two files claim the same place in the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Keep whatever was registered first and log a warning
    #[default]
    FirstWins,
    /// Abort compilation
    Error,
}

/// Conflict handling used by the tree merger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// A second page (or layout) for an already claimed slot
    #[serde(default)]
    pub duplicates: ConflictPolicy,

    /// Two differently named dynamic segments at one level, e.g. `[id]` and `[slug]`
    #[serde(default)]
    pub dynamic_segments: ConflictPolicy,
}

impl MergeOptions {
    /// Fail fast on every ambiguity
    pub fn strict() -> Self {
        Self {
            duplicates: ConflictPolicy::Error,
            dynamic_segments: ConflictPolicy::Error,
        }
    }
}

fn default_root_prefix() -> String {
    "app".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            root_prefix: default_root_prefix(),
        }
    }
}

impl CompilerConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing or empty files yield the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }

    /// Replaces the identifier root prefix
    pub fn with_root_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.routing.root_prefix = prefix.into();
        self
    }

    /// Replaces the conflict handling
    pub fn with_conflicts(mut self, conflicts: MergeOptions) -> Self {
        self.conflicts = conflicts;
        self
    }

    /// Shorthand for `with_conflicts(MergeOptions::strict())`
    pub fn strict(self) -> Self {
        self.with_conflicts(MergeOptions::strict())
    }
}
