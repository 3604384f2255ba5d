//! Typed model of the 1Password `export.data` document.
//!
//! Only the top-level `accounts` list is modelled. The splice target,
//! `accounts[0].vaults[0].items`, is reached through the raw JSON values, so
//! every other account and vault is carried as-is (explicit `null`s and
//! unexpected shapes included) and written back in its original key order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MigrateError;
use crate::target::Account;

/// The whole target document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDocument {
    #[serde(flatten)]
    extra: Map<String, Value>,
    accounts: Vec<Value>,
}

impl TargetDocument {
    /// Parse a target document.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Substitution`] if `data` is not valid JSON or
    /// lacks an `accounts` array.
    pub fn from_json(data: &str) -> Result<Self, MigrateError> {
        serde_json::from_str(data)
            .map_err(|e| MigrateError::Substitution(format!("invalid target document: {e}")))
    }

    /// Replace the items of vault 0 of account 0 with `accounts`.
    ///
    /// Pre-existing items are discarded. Returns how many were replaced; a
    /// missing or non-array `items` value counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Substitution`] if the document has no account
    /// or the first account has no vault, and [`MigrateError::Serialize`] if
    /// an account cannot be converted to JSON.
    pub fn replace_items(&mut self, accounts: &[Account]) -> Result<usize, MigrateError> {
        let items = accounts
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MigrateError::Serialize(format!("failed to encode account: {e}")))?;

        let vault = self.first_vault_mut()?;
        let previous = vault.insert("items".to_string(), Value::Array(items));
        Ok(previous
            .as_ref()
            .and_then(Value::as_array)
            .map_or(0, Vec::len))
    }

    /// Items currently held by vault 0 of account 0, if that vault exists.
    /// A vault without an `items` array reads as empty.
    #[must_use]
    pub fn items(&self) -> Option<&[Value]> {
        self.accounts
            .first()
            .and_then(|account| account.get("vaults"))
            .and_then(Value::as_array)
            .and_then(|vaults| vaults.first())
            .and_then(Value::as_object)
            .map(|vault| {
                vault
                    .get("items")
                    .and_then(Value::as_array)
                    .map_or(&[][..], Vec::as_slice)
            })
    }

    /// Serialize the document compactly.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, MigrateError> {
        serde_json::to_string(self)
            .map_err(|e| MigrateError::Serialize(format!("failed to encode document: {e}")))
    }

    fn first_vault_mut(&mut self) -> Result<&mut Map<String, Value>, MigrateError> {
        let account = self
            .accounts
            .first_mut()
            .ok_or_else(|| MigrateError::Substitution("document has no accounts".to_string()))?
            .as_object_mut()
            .ok_or_else(|| {
                MigrateError::Substitution("first account is not an object".to_string())
            })?;

        account
            .get_mut("vaults")
            .and_then(Value::as_array_mut)
            .and_then(|vaults| vaults.first_mut())
            .ok_or_else(|| MigrateError::Substitution("first account has no vaults".to_string()))?
            .as_object_mut()
            .ok_or_else(|| MigrateError::Substitution("first vault is not an object".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
