// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host-held instance state.
//!
//! The host owns one key/value store plus an identity slot per managed
//! instance. The adapter only reads and writes it through [`State`].
//! [`MemoryState`] is an in-process implementation, typed by a
//! [`SchemaMap`] when one is supplied.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    error::BoxError,
    schema::{SchemaMap, ValueType},
    value::{Kind, Value}
};

/// Per-instance state surface provided by the host.
pub trait State: Send {
    /// Value stored under `key`, if one has been set.
    fn get_ok(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Host-specific; the adapter propagates it unchanged.
    fn set(&mut self, key: &str, value: Value) -> Result<(), BoxError>;

    /// Current identity. Empty means the object is absent.
    fn id(&self) -> &str;

    /// Replace the identity.
    fn set_id(&mut self, id: &str);
}

/// Write rejected by a typed [`MemoryState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The key is not part of the schema.
    #[error("invalid address to set: {key}")]
    UnknownKey {
        /// Offending key.
        key: String
    },

    /// The value kind does not match the schema entry.
    #[error("{key}: expected {expected:?}, got {found}")]
    KindMismatch {
        /// Offending key.
        key:      String,
        /// Schema value type.
        expected: ValueType,
        /// Kind of the rejected value.
        found:    Kind
    }
}

/// In-memory instance state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryState {
    schema: Option<SchemaMap>,
    values: BTreeMap<String, Value>,
    id:     String
}

impl MemoryState {
    /// Untyped state accepting any key and value.
    pub fn new() -> Self {
        Self::default()
    }

    /// State that validates writes against `schema`.
    pub fn typed(schema: &SchemaMap) -> Self {
        Self {
            schema: Some(schema.clone()),
            ..Self::default()
        }
    }

    /// Seed a value without validation, as the host would from configuration.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Seed the identity.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Borrow the value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// All stored values, ordered by key.
    pub const fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Check if the identity slot is empty.
    pub fn is_absent(&self) -> bool {
        self.id.is_empty()
    }

    fn validate(&self, key: &str, value: &Value) -> Result<(), StateError> {
        let Some(schema) = &self.schema else {
            return Ok(());
        };
        let entry = schema.get(key).ok_or_else(|| StateError::UnknownKey {
            key: key.to_string()
        })?;
        if entry.value_type.accepts(value) {
            Ok(())
        } else {
            Err(StateError::KindMismatch {
                key:      key.to_string(),
                expected: entry.value_type,
                found:    value.kind()
            })
        }
    }
}

impl State for MemoryState {
    fn get_ok(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), BoxError> {
        self.validate(key, &value)?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        id.clone_into(&mut self.id);
    }
}
