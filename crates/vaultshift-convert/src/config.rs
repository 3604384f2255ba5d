//! Migration configuration — a small JSON file naming the two documents.
//!
//! ```json
//! { "sourceFile": "enpass.json", "targetFile": "export.data" }
//! ```
//!
//! Relative paths are resolved against the directory holding the
//! configuration file, so a run does not depend on the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MigrateError;
use crate::translate::Labels;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vaultshift.json";

/// Inputs of one migration run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MigrationConfig {
    /// Enpass export to read.
    pub source_file: PathBuf,

    /// 1Password document to read, rewrite and persist in place.
    pub target_file: PathBuf,

    /// Display labels for translated logins.
    #[serde(default)]
    pub labels: Labels,
}

impl MigrationConfig {
    /// Configuration for two explicit paths with default labels.
    #[must_use]
    pub fn new(source_file: impl Into<PathBuf>, target_file: impl Into<PathBuf>) -> Self {
        Self {
            source_file: source_file.into(),
            target_file: target_file.into(),
            labels: Labels::default(),
        }
    }

    /// Load and resolve a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Config`] when the file cannot be read, is not
    /// valid JSON, or lacks `sourceFile` / `targetFile`.
    pub fn load(path: &Path) -> Result<Self, MigrateError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MigrateError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            MigrateError::Config(format!("invalid configuration {}: {e}", path.display()))
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative_to(base))
    }

    /// Anchor relative paths at `base`. Absolute paths are kept as-is.
    #[must_use]
    pub fn resolve_relative_to(self, base: &Path) -> Self {
        Self {
            source_file: base.join(self.source_file),
            target_file: base.join(self.target_file),
            labels: self.labels,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
