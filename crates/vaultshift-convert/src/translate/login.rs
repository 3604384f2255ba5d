//! Login translator.
//!
//! A login's flat field list is reduced to one value per recognized kind,
//! then spread over the target's overview, designated login fields and a
//! single free-form section carrying the email and one-time-password secret.

use md5::{Digest, Md5};

use super::Labels;
use crate::classify::LoginItem;
use crate::source::SourceField;
use crate::target::{
    Account, AccountDetails, CategoryUuid, Designation, EmailValue, InputTraits, ItemState,
    LoginField, LoginFieldType, Overview, OverviewUrl, Section, SectionField, SectionFieldValue,
};

/// Prefix of every one-time-password section field id.
pub const TOTP_ID_PREFIX: &str = "TOTP_";

/// Name of the section every translated login starts with.
const ADD_MORE_SECTION: &str = "add more";

/// Autofill mode of the overview website entry.
const URL_MODE_DEFAULT: &str = "default";

// ---------------------------------------------------------------------------
// Field accumulation
// ---------------------------------------------------------------------------

/// Source field types the translator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Email,
    Password,
    Url,
    Totp,
}

impl FieldKind {
    /// Map a source `type` tag. Unknown tags return `None` and are ignored.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "username" => Some(Self::Username),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "url" => Some(Self::Url),
            "totp" => Some(Self::Totp),
            _ => None,
        }
    }
}

/// The last non-empty value seen for each recognized field kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginValues {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
    pub totp: Option<String>,
}

impl LoginValues {
    /// Reduce a field list left to right. A non-empty value replaces any
    /// earlier value of the same kind; empty values never do.
    #[must_use]
    pub fn collect(fields: &[SourceField]) -> Self {
        fields.iter().fold(Self::default(), Self::absorb)
    }

    fn absorb(mut self, field: &SourceField) -> Self {
        if field.value.is_empty() {
            return self;
        }
        let slot = match FieldKind::from_tag(&field.kind) {
            Some(FieldKind::Username) => &mut self.username,
            Some(FieldKind::Email) => &mut self.email,
            Some(FieldKind::Password) => &mut self.password,
            Some(FieldKind::Url) => &mut self.url,
            Some(FieldKind::Totp) => &mut self.totp,
            None => return self,
        };
        *slot = Some(field.value.clone());
        self
    }

    /// Username, falling back to the email address when no username was set.
    #[must_use]
    pub fn effective_username(&self) -> Option<&str> {
        self.username.as_deref().or(self.email.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Translate a login item into a `"001"` account.
#[must_use]
pub fn translate_login(item: &LoginItem, labels: &Labels) -> Account {
    let values = LoginValues::collect(&item.fields);
    let url = values.url.clone().unwrap_or_default();

    let mut login_fields = Vec::with_capacity(2);
    if let Some(username) = values.effective_username() {
        login_fields.push(designated_field(
            username,
            Designation::Username,
            LoginFieldType::Text,
        ));
    }
    if let Some(password) = values.password.as_deref() {
        login_fields.push(designated_field(
            password,
            Designation::Password,
            LoginFieldType::Concealed,
        ));
    }

    let mut section = Section {
        title: String::new(),
        name: ADD_MORE_SECTION.to_string(),
        fields: Vec::new(),
    };
    if let Some(email) = values.email.as_deref() {
        section.fields.push(email_field(email, labels));
    }
    if let Some(secret) = values.totp.as_deref() {
        section.fields.push(totp_field(secret, labels));
    }

    Account {
        uuid: item.meta.uuid.clone(),
        fav_index: 0,
        created_at: item.meta.created_at,
        updated_at: item.meta.updated_at,
        state: ItemState::Active,
        category_uuid: CategoryUuid::Login,
        details: AccountDetails {
            login_fields,
            notes_plain: String::new(),
            sections: vec![section],
            password_history: Vec::new(),
        },
        overview: Overview {
            title: item.meta.title.clone(),
            subtitle: item.meta.subtitle.clone(),
            icons: None,
            urls: vec![OverviewUrl {
                label: labels.website.clone(),
                url: url.clone(),
                mode: URL_MODE_DEFAULT.to_string(),
            }],
            url,
            watchtower_exclusions: None,
        },
    }
}

/// Section field id for a one-time-password secret: `TOTP_` followed by the
/// uppercase hex MD5 of the secret.
///
/// This is a stable identifier, not a protection of the secret.
#[must_use]
pub fn totp_field_id(secret: &str) -> String {
    let digest = Md5::digest(secret.as_bytes());
    format!("{TOTP_ID_PREFIX}{}", data_encoding::HEXUPPER.encode(&digest))
}

fn designated_field(value: &str, designation: Designation, field_type: LoginFieldType) -> LoginField {
    LoginField {
        value: value.to_string(),
        id: String::new(),
        name: designation.as_str().to_string(),
        field_type,
        designation,
    }
}

fn email_field(email: &str, labels: &Labels) -> SectionField {
    SectionField {
        title: labels.email.clone(),
        id: String::new(),
        value: SectionFieldValue::Email(EmailValue {
            email_address: email.to_string(),
            provider: None,
        }),
        guarded: false,
        multiline: false,
        dont_generate: false,
        input_traits: InputTraits::email(),
    }
}

fn totp_field(secret: &str, labels: &Labels) -> SectionField {
    SectionField {
        title: labels.one_time_password.clone(),
        id: totp_field_id(secret),
        value: SectionFieldValue::Totp(secret.to_string()),
        guarded: false,
        multiline: false,
        dont_generate: false,
        input_traits: InputTraits::plain(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
