//! Enpass JSON export model.
//!
//! The export stores every item in a top-level `items` array. Items are read
//! defensively: a key with an unexpected JSON type reads as empty (or `0` for
//! timestamps) instead of failing the whole export. Only the document itself
//! has to be valid JSON.

use serde_json::{Map, Value};

use crate::error::MigrateError;

// ---------------------------------------------------------------------------
// Source types
// ---------------------------------------------------------------------------

/// A parsed source export: the ordered item list and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceExport {
    /// Items in export order.
    pub items: Vec<SourceItem>,
}

/// One stored item as read from the export.
///
/// `fields` is only meaningful for logins and `note` only for secure notes;
/// both are read for every item and left empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceItem {
    /// Stable identity, copied to the target unchanged.
    pub uuid: String,
    /// Display title.
    pub title: String,
    /// Display subtitle.
    pub subtitle: String,
    /// Kind tag (`login`, `note`, or anything else).
    pub category: String,
    /// Creation timestamp, opaque epoch units.
    pub created_at: i64,
    /// Last update timestamp, opaque epoch units.
    pub updated_at: i64,
    /// Typed key/value fields in export order.
    pub fields: Vec<SourceField>,
    /// Free-text body of a secure note.
    pub note: String,
}

/// A `{type, value}` pair from a login's field list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceField {
    /// Field type tag (`username`, `email`, `password`, `url`, `totp`, ...).
    pub kind: String,
    /// Field value, possibly empty.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl SourceExport {
    /// Parse an export from its JSON text.
    ///
    /// A missing or non-array `items` key yields an empty export.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::SourceParse`] if `data` is not valid JSON.
    pub fn from_json(data: &str) -> Result<Self, MigrateError> {
        let root: Value = serde_json::from_str(data)
            .map_err(|e| MigrateError::SourceParse(format!("invalid export JSON: {e}")))?;
        Ok(Self::from_value(&root))
    }

    /// Build an export from an already parsed JSON document.
    #[must_use]
    pub fn from_value(root: &Value) -> Self {
        let items = root
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(SourceItem::from_value).collect())
            .unwrap_or_default();
        Self { items }
    }
}

impl SourceItem {
    /// Read one item. Non-object values produce an empty item, which the
    /// classifier then treats as unrecognized.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        // Enpass writes `updated_at`; accept the camelCase spelling first.
        let updated_at = if obj.contains_key("updatedAt") {
            integer(obj, "updatedAt")
        } else {
            integer(obj, "updated_at")
        };

        let fields = obj
            .get("fields")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().map(SourceField::from_value).collect())
            .unwrap_or_default();

        Self {
            uuid: text(obj, "uuid"),
            title: text(obj, "title"),
            subtitle: text(obj, "subtitle"),
            category: text(obj, "category"),
            created_at: integer(obj, "createdAt"),
            updated_at,
            fields,
            note: text(obj, "note"),
        }
    }
}

impl SourceField {
    fn from_value(value: &Value) -> Self {
        value.as_object().map_or_else(Self::default, |obj| Self {
            kind: text(obj, "type"),
            value: text(obj, "value"),
        })
    }
}

/// Read `key` as text. Numbers and booleans use their JSON spelling;
/// anything else is empty.
fn text(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
    }
}

/// Read `key` as a signed integer, accepting numeric strings.
#[allow(clippy::cast_possible_truncation)]
fn integer(obj: &Map<String, Value>, key: &str) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
