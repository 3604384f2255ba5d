//! Translators from classified source items to target accounts.
//!
//! Each translator module implements a single function:
//! `translate_X(item, labels) -> Account`
//!
//! Shared types (`Labels`, `Translation`, `TranslationReport`) and the
//! per-export driver (`translate_items`) live here.

pub mod login;
pub mod note;

use serde::{Deserialize, Serialize};

use crate::classify::{self, ClassifiedItem};
use crate::source::SourceItem;
use crate::target::Account;

pub use login::{totp_field_id, translate_login, LoginValues};
pub use note::translate_note;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Localized display strings written into translated logins.
///
/// Defaults are the Simplified Chinese labels of the target application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    /// Label of the overview website entry.
    #[serde(default = "default_website")]
    pub website: String,

    /// Title of the email section field.
    #[serde(default = "default_email")]
    pub email: String,

    /// Title of the one-time-password section field.
    #[serde(default = "default_one_time_password")]
    pub one_time_password: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            website: default_website(),
            email: default_email(),
            one_time_password: default_one_time_password(),
        }
    }
}

fn default_website() -> String {
    "网站".into()
}
fn default_email() -> String {
    "电子邮件".into()
}
fn default_one_time_password() -> String {
    "一次性密码".into()
}

// ---------------------------------------------------------------------------
// Translation result
// ---------------------------------------------------------------------------

/// Per-run counts of translated and skipped items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationReport {
    /// Logins translated.
    pub logins: usize,
    /// Secure notes translated.
    pub notes: usize,
    /// Items dropped because of an unsupported category.
    pub skipped: usize,
}

impl TranslationReport {
    /// Number of accounts produced.
    #[must_use]
    pub const fn translated(&self) -> usize {
        self.logins.saturating_add(self.notes)
    }
}

/// Translated accounts in source order, plus the run report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub accounts: Vec<Account>,
    pub report: TranslationReport,
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Translate a classified item. Unrecognized items produce `None`.
#[must_use]
pub fn translate_item(item: ClassifiedItem, labels: &Labels) -> Option<Account> {
    match item {
        ClassifiedItem::Login(login) => Some(translate_login(&login, labels)),
        ClassifiedItem::SecureNote(note) => Some(translate_note(note)),
        ClassifiedItem::Unrecognized => None,
    }
}

/// Classify and translate every item, preserving source order.
#[must_use]
pub fn translate_items(items: Vec<SourceItem>, labels: &Labels) -> Translation {
    let mut translation = Translation {
        accounts: Vec::with_capacity(items.len()),
        report: TranslationReport::default(),
    };

    for item in items {
        let classified = classify::classify(item);
        let report = &mut translation.report;
        match &classified {
            ClassifiedItem::Login(_) => report.logins = report.logins.saturating_add(1),
            ClassifiedItem::SecureNote(_) => report.notes = report.notes.saturating_add(1),
            ClassifiedItem::Unrecognized => report.skipped = report.skipped.saturating_add(1),
        }

        if let Some(account) = translate_item(classified, labels) {
            tracing::debug!(
                uuid = %account.uuid,
                category = account.category_uuid.as_str(),
                "translated item"
            );
            translation.accounts.push(account);
        }
    }

    translation
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::CategoryUuid;

    fn item(uuid: &str, category: &str) -> SourceItem {
        SourceItem {
            uuid: uuid.into(),
            category: category.into(),
            ..SourceItem::default()
        }
    }

    #[test]
    fn default_labels_are_localized() {
        let labels = Labels::default();
        assert_eq!(labels.website, "网站");
        assert_eq!(labels.email, "电子邮件");
        assert_eq!(labels.one_time_password, "一次性密码");
    }

    #[test]
    fn labels_fill_missing_keys_with_defaults() {
        let labels: Labels = serde_json::from_str(r#"{"website":"Website"}"#).unwrap();
        assert_eq!(labels.website, "Website");
        assert_eq!(labels.email, "电子邮件");
    }

    #[test]
    fn translate_items_keeps_order_and_counts() {
        let items = vec![
            item("a", "note"),
            item("b", "creditcard"),
            item("c", "login"),
            item("d", "note"),
            item("e", ""),
        ];

        let translation = translate_items(items, &Labels::default());

        let uuids: Vec<&str> = translation.accounts.iter().map(|a| a.uuid.as_str()).collect();
        assert_eq!(uuids, ["a", "c", "d"]);
        assert_eq!(translation.accounts[1].category_uuid, CategoryUuid::Login);
        assert_eq!(
            translation.report,
            TranslationReport {
                logins: 1,
                notes: 2,
                skipped: 2,
            }
        );
        assert_eq!(translation.report.translated(), 3);
    }

    #[test]
    fn translate_item_drops_unrecognized() {
        assert!(translate_item(ClassifiedItem::Unrecognized, &Labels::default()).is_none());
    }

    #[test]
    fn empty_input_produces_empty_translation() {
        let translation = translate_items(Vec::new(), &Labels::default());
        assert_eq!(translation, Translation::default());
    }
}
