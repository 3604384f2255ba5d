//! Migration error types for `vaultshift-convert`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by a migration run.
///
/// Every variant is fatal: the run stops and the target file is left as it
/// was. Item-level anomalies (unknown categories, empty fields) are never
/// reported here.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Configuration file missing, unreadable or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The source export could not be read.
    #[error("failed to read source export {}: {source}", path.display())]
    SourceRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The source export is not valid JSON.
    #[error("invalid source export: {0}")]
    SourceParse(String),

    /// The target document could not be read.
    #[error("failed to read target document {}: {source}", path.display())]
    TargetRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The target document could not be parsed, or the item list at
    /// `accounts[0].vaults[0]` could not be located.
    #[error("cannot substitute items in target document: {0}")]
    Substitution(String),

    /// The rewritten document could not be serialized.
    #[error("failed to serialize target document: {0}")]
    Serialize(String),

    /// The rewritten document could not be persisted.
    #[error("failed to write target document {}: {source}", path.display())]
    TargetWrite {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
