// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declarative schema descriptors.
//!
//! A [`SchemaMap`] describes every externally visible field of a record type
//! by its external key. It is derived once per type and shared by every
//! managed instance of that type.

use std::collections::BTreeMap;

use crate::value::{Kind, Value};

/// Declarative value type understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Text.
    String,

    /// Boolean.
    Bool
}

impl ValueType {
    /// Check if a state value is representable under this type.
    pub const fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_)) | (Self::Bool, Value::Bool(_))
        )
    }
}

/// Map a field's primitive kind to its declarative value type.
///
/// # Errors
///
/// Returns the kind back for anything other than `String` and `bool`; the
/// schema builder turns that into a registration fault.
pub const fn schema_type(kind: Kind) -> Result<ValueType, Kind> {
    match kind {
        Kind::String => Ok(ValueType::String),
        Kind::Bool => Ok(ValueType::Bool),
        other => Err(other)
    }
}

/// Declarative descriptor of one schema entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Value type.
    pub value_type: ValueType,

    /// Value may be filled in by the record.
    pub computed: bool,

    /// Value may be omitted by the operator.
    pub optional: bool,

    /// Value must be supplied by the operator.
    pub required: bool,

    /// Changing the value replaces the managed object.
    pub force_new: bool
}

impl Schema {
    /// Create a descriptor with every flag unset.
    pub const fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            computed: false,
            optional: false,
            required: false,
            force_new: false
        }
    }

    /// Set `computed`.
    #[must_use]
    pub const fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Set `optional`.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set `required`.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set `force_new`.
    #[must_use]
    pub const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }
}

/// External key to descriptor, ordered by key.
pub type SchemaMap = BTreeMap<String, Schema>;
