//! Secure-note translator.

use crate::classify::NoteItem;
use crate::target::{Account, AccountDetails, CategoryUuid, ItemState, Overview};

/// Translate a secure note into a `"003"` account.
///
/// The body is copied verbatim, including when it is empty or whitespace.
#[must_use]
pub fn translate_note(item: NoteItem) -> Account {
    let NoteItem { meta, note } = item;

    Account {
        uuid: meta.uuid,
        fav_index: 0,
        created_at: meta.created_at,
        updated_at: meta.updated_at,
        state: ItemState::Active,
        category_uuid: CategoryUuid::SecureNote,
        details: AccountDetails {
            login_fields: Vec::new(),
            notes_plain: note,
            sections: Vec::new(),
            password_history: Vec::new(),
        },
        overview: Overview {
            title: meta.title,
            subtitle: meta.subtitle,
            icons: None,
            urls: Vec::new(),
            url: String::new(),
            watchtower_exclusions: None,
        },
    }
}
