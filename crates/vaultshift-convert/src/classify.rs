//! Item classification by category tag.

use crate::source::{SourceField, SourceItem};

/// Category tag of a credential login.
pub const CATEGORY_LOGIN: &str = "login";
/// Category tag of a secure note.
pub const CATEGORY_NOTE: &str = "note";

/// Identity and display data shared by every translatable item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMeta {
    pub uuid: String,
    pub title: String,
    pub subtitle: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A login item with its field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginItem {
    pub meta: ItemMeta,
    pub fields: Vec<SourceField>,
}

/// A secure note with its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub meta: ItemMeta,
    pub note: String,
}

/// Result of classifying a source item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedItem {
    Login(LoginItem),
    SecureNote(NoteItem),
    /// Any other category, including an empty one. Produces no output.
    Unrecognized,
}

/// Classify one item by its exact, case-sensitive category tag.
#[must_use]
pub fn classify(item: SourceItem) -> ClassifiedItem {
    let SourceItem {
        uuid,
        title,
        subtitle,
        category,
        created_at,
        updated_at,
        fields,
        note,
    } = item;

    let meta = ItemMeta {
        uuid,
        title,
        subtitle,
        created_at,
        updated_at,
    };

    match category.as_str() {
        CATEGORY_LOGIN => ClassifiedItem::Login(LoginItem { meta, fields }),
        CATEGORY_NOTE => ClassifiedItem::SecureNote(NoteItem { meta, note }),
        other => {
            tracing::warn!(
                uuid = %meta.uuid,
                category = other,
                "skipping item with unsupported category"
            );
            ClassifiedItem::Unrecognized
        }
    }
}
