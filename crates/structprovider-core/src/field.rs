// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field descriptor table entries.
//!
//! [`Record::fields`](crate::Record::fields) returns one [`Field`] per
//! struct field: its identifier, its annotation string and how to reach its
//! value. The table replaces runtime type introspection; the schema builder
//! walks it once per type.

use std::fmt;

use crate::value::{Kind, Value};

/// Reads a field out of a record.
pub type Getter<R> = fn(&R) -> Value;

/// Writes a state value into a field, handing it back on kind mismatch.
pub type Setter<R> = fn(&mut R, Value) -> Result<(), Value>;

/// How a field's value is reached.
pub enum FieldAccess<R> {
    /// A primitive value with typed accessors.
    Value {
        /// Primitive kind of the field.
        kind: Kind,
        /// Accessor used by `Set`.
        get:  Getter<R>,
        /// Accessor used by `Get`.
        set:  Setter<R>
    },

    /// A flattened sub-record. Not supported; rejected by the schema builder.
    Embedded,

    /// A non-primitive field that must be excluded with `-`.
    Opaque
}

/// One entry of a record's field descriptor table.
pub struct Field<R> {
    ident:  &'static str,
    tag:    &'static str,
    access: FieldAccess<R>
}

impl<R> Field<R> {
    /// Primitive field with typed accessors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use structprovider_core::{Field, Kind, Primitive};
    ///
    /// #[derive(Default)]
    /// struct Zone {
    ///     name: String
    /// }
    ///
    /// let field = Field::new(
    ///     "name",
    ///     ",optional,computed",
    ///     Kind::String,
    ///     |zone: &Zone| zone.name.to_value(),
    ///     |zone: &mut Zone, value| {
    ///         zone.name = String::from_value(value)?;
    ///         Ok(())
    ///     }
    /// );
    /// assert_eq!(field.ident(), "name");
    /// ```
    pub const fn new(
        ident: &'static str,
        tag: &'static str,
        kind: Kind,
        get: Getter<R>,
        set: Setter<R>
    ) -> Self {
        Self {
            ident,
            tag,
            access: FieldAccess::Value {
                kind,
                get,
                set
            }
        }
    }

    /// Flattened sub-record field.
    pub const fn embedded(ident: &'static str, tag: &'static str) -> Self {
        Self {
            ident,
            tag,
            access: FieldAccess::Embedded
        }
    }

    /// Field without value accessors.
    pub const fn opaque(ident: &'static str, tag: &'static str) -> Self {
        Self {
            ident,
            tag,
            access: FieldAccess::Opaque
        }
    }

    /// Internal field identifier.
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Raw annotation string.
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// How the value is reached.
    pub const fn access(&self) -> &FieldAccess<R> {
        &self.access
    }

    /// Check if this is a flattened sub-record.
    pub const fn is_embedded(&self) -> bool {
        matches!(self.access, FieldAccess::Embedded)
    }

    /// Primitive kind, for value fields.
    pub const fn kind(&self) -> Option<Kind> {
        match &self.access {
            FieldAccess::Value {
                kind, ..
            } => Some(*kind),
            _ => None
        }
    }

    /// Read the field's current value.
    pub fn extract(&self, record: &R) -> Option<Value> {
        match &self.access {
            FieldAccess::Value {
                get, ..
            } => Some(get(record)),
            _ => None
        }
    }

    /// Assign a state value to the field.
    ///
    /// # Errors
    ///
    /// Returns the value back if its kind does not match the field or the
    /// field has no accessors.
    pub fn assign(&self, record: &mut R, value: Value) -> Result<(), Value> {
        match &self.access {
            FieldAccess::Value {
                set, ..
            } => set(record, value),
            _ => Err(value)
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match &self.access {
            FieldAccess::Value {
                kind, ..
            } => kind.to_string(),
            FieldAccess::Embedded => "embedded".to_string(),
            FieldAccess::Opaque => "opaque".to_string()
        };
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("tag", &self.tag)
            .field("access", &access)
            .finish()
    }
}
