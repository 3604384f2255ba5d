//! `vaultshift-convert` — Enpass to 1Password vault migration.
//!
//! Reads an Enpass JSON export, translates logins and secure notes into
//! 1Password import items, and splices them into the first vault of a
//! 1Password `export.data` document.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod migrate;
pub mod source;
pub mod target;
pub mod translate;

pub use classify::{classify, ClassifiedItem, ItemMeta, LoginItem, NoteItem};
pub use config::{MigrationConfig, DEFAULT_CONFIG_FILE};
pub use document::TargetDocument;
pub use error::MigrateError;
pub use migrate::{migrate_documents, run, write_atomic, MigratedDocument, MigrationOutcome};
pub use source::{SourceExport, SourceField, SourceItem};
pub use target::{
    Account, AccountDetails, CategoryUuid, Designation, EmailValue, InputTraits, ItemState,
    LoginField, LoginFieldType, Overview, OverviewUrl, Section, SectionField, SectionFieldValue,
};
pub use translate::{
    totp_field_id, translate_items, translate_login, translate_note, Labels, LoginValues,
    Translation, TranslationReport,
};
