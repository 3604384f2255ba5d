//! 1Password import item model.
//!
//! Field order in each struct is the key order of the serialized JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A translated item, ready to be placed in a vault's `items` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Identity copied from the source item.
    pub uuid: String,
    /// Favorite position; imported items are never favorited.
    pub fav_index: u32,
    /// Creation timestamp copied from the source item.
    pub created_at: i64,
    /// Update timestamp copied from the source item.
    pub updated_at: i64,
    /// Item state.
    pub state: ItemState,
    /// Target category code.
    pub category_uuid: CategoryUuid,
    /// Category-specific payload.
    pub details: AccountDetails,
    /// Display metadata.
    pub overview: Overview,
}

/// Lifecycle state of an imported item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    /// Visible in the vault.
    Active,
}

/// Fixed category codes understood by the target application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryUuid {
    /// Login credential (`"001"`).
    #[serde(rename = "001")]
    Login,
    /// Secure note (`"003"`).
    #[serde(rename = "003")]
    SecureNote,
}

impl CategoryUuid {
    /// The code as written in the document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "001",
            Self::SecureNote => "003",
        }
    }
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

/// Display metadata shown in item lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub title: String,
    pub subtitle: String,
    /// Always `null`: icons are not migrated.
    pub icons: Option<Value>,
    /// Labeled URLs; omitted entirely when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<OverviewUrl>,
    /// Primary URL, empty when none.
    pub url: String,
    /// Always `null`: watchtower exclusions are not migrated.
    pub watchtower_exclusions: Option<Value>,
}

/// A labeled website entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewUrl {
    pub label: String,
    pub url: String,
    /// Autofill matching mode.
    pub mode: String,
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

/// Category-specific item payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    /// Autofill-recognized fields (username, password).
    pub login_fields: Vec<LoginField>,
    /// Plain-text notes body.
    pub notes_plain: String,
    /// Free-form field groups.
    pub sections: Vec<Section>,
    /// Always empty: password history is not migrated.
    pub password_history: Vec<Value>,
}

/// A login field with a designation the target's autofill recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginField {
    pub value: String,
    /// Empty for designated fields.
    pub id: String,
    pub name: String,
    pub field_type: LoginFieldType,
    pub designation: Designation,
}

/// Plain or concealed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginFieldType {
    /// Plain text (`"T"`).
    #[serde(rename = "T")]
    Text,
    /// Concealed text (`"p"`).
    #[serde(rename = "p")]
    Concealed,
}

/// Semantic role of a login field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    Username,
    Password,
}

impl Designation {
    /// The designation string, also used as the field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

/// A named group of section fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub name: String,
    pub fields: Vec<SectionField>,
}

/// A typed value inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionField {
    pub title: String,
    pub id: String,
    pub value: SectionFieldValue,
    pub guarded: bool,
    pub multiline: bool,
    pub dont_generate: bool,
    pub input_traits: InputTraits,
}

/// Section field payload, serialized as `{"totp": ...}` or `{"email": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionFieldValue {
    /// One-time-password secret, copied verbatim.
    Totp(String),
    /// Email address.
    Email(EmailValue),
}

/// Email payload of a section field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailValue {
    pub email_address: String,
    /// Always `null`.
    pub provider: Option<Value>,
}

/// Keyboard hints for editing a field on mobile clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTraits {
    pub keyboard: String,
    pub correction: String,
    pub capitalization: String,
}

impl InputTraits {
    /// Email keyboard, no autocorrect, no auto-capitalization.
    #[must_use]
    pub fn email() -> Self {
        Self::with_keyboard("emailAddress")
    }

    /// Default keyboard, no autocorrect, no auto-capitalization.
    #[must_use]
    pub fn plain() -> Self {
        Self::with_keyboard("default")
    }

    fn with_keyboard(keyboard: &str) -> Self {
        Self {
            keyboard: keyboard.to_string(),
            correction: "no".to_string(),
            capitalization: "none".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
