//! End-to-end migration: read, translate, splice, echo, persist.
//!
//! # Flow
//!
//! 1. Read and parse the source export
//! 2. Classify and translate every item
//! 3. Read the target document and replace `accounts[0].vaults[0].items`
//! 4. Serialize the document and echo it to the caller's sink
//! 5. Persist it over the target file (write to `.tmp`, then rename)
//!
//! Any failure before step 5 aborts the run with the target file untouched.
//! A failed echo is logged and does not stop the run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::MigrationConfig;
use crate::document::TargetDocument;
use crate::error::MigrateError;
use crate::source::SourceExport;
use crate::target::Account;
use crate::translate::{self, Labels, TranslationReport};

/// Result of an in-memory migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedDocument {
    /// The rewritten target document, compact JSON.
    pub json: String,
    /// Counts of translated and skipped items.
    pub report: TranslationReport,
    /// Number of items that were in the target vault before replacement.
    pub replaced: usize,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// Counts of translated and skipped items.
    pub report: TranslationReport,
    /// Number of pre-existing target items discarded.
    pub replaced: usize,
    /// Bytes written to the target file.
    pub bytes_written: usize,
}

/// Translate `source` and splice the result into `target`, without I/O.
///
/// # Errors
///
/// - [`MigrateError::SourceParse`] if `source` is not valid JSON
/// - [`MigrateError::Substitution`] if the item list cannot be located in `target`
/// - [`MigrateError::Serialize`] if the output cannot be encoded
pub fn migrate_documents(
    source: &str,
    target: &str,
    labels: &Labels,
) -> Result<MigratedDocument, MigrateError> {
    let export = SourceExport::from_json(source)?;
    let translation = translate::translate_items(export.items, labels);
    splice(&translation.accounts, target).map(|(json, replaced)| MigratedDocument {
        json,
        report: translation.report,
        replaced,
    })
}

/// Run a full migration described by `config`.
///
/// The final document is written to `echo` (followed by a newline) before
/// the target file is replaced. An `echo` failure, such as a closed pipe, is
/// logged at `warn` and the document is still persisted.
///
/// # Errors
///
/// - [`MigrateError::SourceRead`] if the source export cannot be read
/// - [`MigrateError::SourceParse`] if it is not valid JSON
/// - [`MigrateError::TargetRead`] if the target document cannot be read
/// - [`MigrateError::Substitution`] if the item list cannot be located
/// - [`MigrateError::Serialize`] if the output cannot be encoded
/// - [`MigrateError::TargetWrite`] if persisting fails
pub fn run(config: &MigrationConfig, echo: &mut dyn Write) -> Result<MigrationOutcome, MigrateError> {
    // Step 1: read the source export.
    let source = fs::read_to_string(&config.source_file).map_err(|e| MigrateError::SourceRead {
        path: config.source_file.clone(),
        source: e,
    })?;

    // Step 2: translate before the target is opened.
    let export = SourceExport::from_json(&source)?;
    let total = export.items.len();
    let translation = translate::translate_items(export.items, &config.labels);
    tracing::info!(
        source = %config.source_file.display(),
        items = total,
        logins = translation.report.logins,
        notes = translation.report.notes,
        skipped = translation.report.skipped,
        "translated source export"
    );

    // Step 3: read the target and substitute its item list.
    let target = fs::read_to_string(&config.target_file).map_err(|e| MigrateError::TargetRead {
        path: config.target_file.clone(),
        source: e,
    })?;
    let (json, replaced) = splice(&translation.accounts, &target)?;
    tracing::info!(
        target = %config.target_file.display(),
        replaced,
        inserted = translation.accounts.len(),
        "replaced target vault items"
    );

    // Step 4: echo.
    if let Err(e) = writeln!(echo, "{json}").and_then(|()| echo.flush()) {
        tracing::warn!(error = %e, "failed to echo target document");
    }

    // Step 5: persist.
    write_atomic(&config.target_file, json.as_bytes()).map_err(|e| MigrateError::TargetWrite {
        path: config.target_file.clone(),
        source: e,
    })?;
    tracing::info!(
        target = %config.target_file.display(),
        bytes = json.len(),
        "target document written"
    );

    Ok(MigrationOutcome {
        report: translation.report,
        replaced,
        bytes_written: json.len(),
    })
}

fn splice(accounts: &[Account], target: &str) -> Result<(String, usize), MigrateError> {
    let mut document = TargetDocument::from_json(target)?;
    let replaced = document.replace_items(accounts)?;
    Ok((document.to_json()?, replaced))
}

/// Replace `path` with `contents` via a sibling `.{name}.tmp` file and a
/// rename, so a failed write never truncates the existing file.
///
/// On Unix the written file is always mode `0600`, whatever the permissions
/// of the file it replaces.
///
/// # Errors
///
/// Returns an `io::Error` if the temporary file cannot be written, its
/// permissions cannot be set, or the rename fails. The temporary file is
/// removed on every failure.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let tmp = temp_path(path);

    let result = write_owner_only(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_owner_only(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)?;

    // The document holds plaintext secrets.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "target".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TARGET: &str = r#"{"accounts":[{"attrs":{"uuid":"A"},"vaults":[{"attrs":{"uuid":"V"},"items":[{"uuid":"old"}]}]}]}"#;

    #[test]
    fn migrate_documents_reports_counts() {
        let source = r#"{"items":[
            {"uuid":"l","category":"login","fields":[{"type":"username","value":"u"}]},
            {"uuid":"n","category":"note","note":""},
            {"uuid":"c","category":"creditcard"}
        ]}"#;

        let migrated = migrate_documents(source, TARGET, &Labels::default()).unwrap();
        assert_eq!(migrated.report.logins, 1);
        assert_eq!(migrated.report.notes, 1);
        assert_eq!(migrated.report.skipped, 1);
        assert_eq!(migrated.replaced, 1);
        assert!(migrated.json.starts_with(r#"{"accounts":[{"attrs":{"uuid":"A"},"vaults":[{"attrs":{"uuid":"V"},"items":[{"uuid":"l","#));
        assert!(!migrated.json.contains(r#""uuid":"old""#));
    }

    #[test]
    fn migrate_documents_rejects_bad_source() {
        let err = migrate_documents("[", TARGET, &Labels::default()).unwrap_err();
        assert!(matches!(err, MigrateError::SourceParse(_)));
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        assert_eq!(
            temp_path(Path::new("/data/export.data")),
            Path::new("/data/.export.data.tmp")
        );
    }

    #[test]
    fn write_atomic_replaces_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.data");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join(".export.data.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_sets_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.data");
        write_atomic(&path, b"{}").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.data");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        assert!(write_atomic(&path, b"new").is_err());
        assert!(path.is_dir());
        assert!(!dir.path().join(".export.data.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_tightens_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.data");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, b"new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
