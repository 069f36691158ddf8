// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field values exchanged between records and host state.
//!
//! A record field is one of a handful of primitive Rust types, described by
//! [`Kind`]. Values cross the state boundary as [`Value`]. The
//! [`Primitive`] trait ties the two together and is what generated field
//! accessors call.
//!
//! Only `String` and `bool` fields can appear in a schema; the remaining
//! kinds exist so that a record declaring them is rejected at registration
//! with a precise fault rather than failing to compile somewhere obscure.

use std::fmt;

/// Primitive data kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `String`.
    String,

    /// `bool`.
    Bool,

    /// `i64`.
    Int,

    /// `f64`.
    Float
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float"
        };
        f.write_str(name)
    }
}

/// A single field value as held by host state.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text value.
    String(String),

    /// Boolean value.
    Bool(bool),

    /// Integer value.
    Int(i64),

    /// Floating point value.
    Float(f64)
}

impl Value {
    /// Primitive kind of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float
        }
    }

    /// Borrow the text, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None
        }
    }

    /// The boolean, if this is a boolean value.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A Rust type usable as a record field.
///
/// Conversions are exact: a value of another kind is handed back unchanged
/// so the caller can report what it found.
pub trait Primitive: Sized {
    /// Kind reported to the schema builder.
    const KIND: Kind;

    /// Copy the field out as a state value.
    fn to_value(&self) -> Value;

    /// Take a state value into the field type.
    ///
    /// # Errors
    ///
    /// Returns the value back when its kind does not match [`Self::KIND`].
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl Primitive for String {
    const KIND: Kind = Kind::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other)
        }
    }
}

impl Primitive for bool {
    const KIND: Kind = Kind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other)
        }
    }
}

impl Primitive for i64 {
    const KIND: Kind = Kind::Int;

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(other)
        }
    }
}

impl Primitive for f64 {
    const KIND: Kind = Kind::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Float(x) => Ok(x),
            other => Err(other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(Kind::String.to_string(), "string");
        assert_eq!(Kind::Bool.to_string(), "bool");
        assert_eq!(Kind::Int.to_string(), "int");
        assert_eq!(Kind::Float.to_string(), "float");
    }

    #[test]
    fn value_kind_matches_variant() {
        assert_eq!(Value::from("a").kind(), Kind::String);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(3_i64).kind(), Kind::Int);
        assert_eq!(Value::from(0.5).kind(), Kind::Float);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("zone").as_str(), Some("zone"));
        assert_eq!(Value::from(true).as_str(), None);
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(Value::from("false").as_bool(), None);
    }

    #[test]
    fn mismatched_kind_is_handed_back() {
        assert_eq!(String::from_value(Value::Bool(true)), Err(Value::Bool(true)));
        assert_eq!(bool::from_value(Value::from("yes")), Err(Value::from("yes")));
        assert_eq!(bool::from_value(Value::Bool(true)), Ok(true));
    }
}
