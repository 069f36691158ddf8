// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for structprovider.
//!
//! Two tiers are kept apart:
//!
//! - [`ConfigFault`]: a record type is wired incorrectly. Raised only while
//!   building schemas and registering descriptors, so the host can refuse to
//!   start instead of failing mid-operation.
//! - [`OperationError`]: a lifecycle operation failed. Errors coming from a
//!   record's lifecycle methods or from the host's state surface are carried
//!   unchanged.

use thiserror::Error;

use crate::{record::Capability, value::Kind};

/// Boxed error used to carry record and state failures without rewrapping.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Registration-time fault: a record type cannot be adapted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigFault {
    /// The record type lacks a capability the registration requires.
    #[error("type `{record}` is not a {required}: missing {missing} capability")]
    MissingCapability {
        /// Record type name.
        record:   &'static str,
        /// What the registration asked for (`Resource`, `DataSource`).
        required: &'static str,
        /// First capability found missing.
        missing:  Capability
    },

    /// The record contains an embedded (flattened) sub-record.
    #[error("field `{record}.{field}` is embedded; only flat records are supported")]
    EmbeddedField {
        /// Record type name.
        record: &'static str,
        /// Internal field identifier.
        field:  &'static str
    },

    /// The field's primitive kind has no schema value type.
    #[error("field `{record}.{field}` has unsupported kind {kind}")]
    UnsupportedKind {
        /// Record type name.
        record: &'static str,
        /// Internal field identifier.
        field:  &'static str,
        /// Primitive kind of the field.
        kind:   Kind
    },

    /// The field has no value accessor and was not excluded with `-`.
    #[error("field `{record}.{field}` has no value accessor; tag it \"-\" to exclude it")]
    OpaqueField {
        /// Record type name.
        record: &'static str,
        /// Internal field identifier.
        field:  &'static str
    },

    /// The field's tag carries an option outside the known vocabulary.
    #[error("field `{record}.{field}` has unknown tag option `{option}`")]
    UnknownTagOption {
        /// Record type name.
        record: &'static str,
        /// Internal field identifier.
        field:  &'static str,
        /// The unrecognized token.
        option: String
    },

    /// Two fields resolve to the same external schema key.
    #[error("fields `{record}.{first}` and `{record}.{second}` both map to schema key `{key}`")]
    DuplicateKey {
        /// Record type name.
        record: &'static str,
        /// The colliding external key.
        key:    String,
        /// Field that claimed the key first.
        first:  &'static str,
        /// Field that collided.
        second: &'static str
    },

    /// A provider already holds a descriptor under this name.
    #[error("{kind} `{name}` is already registered")]
    DuplicateName {
        /// `resource` or `data source`.
        kind: &'static str,
        /// The registered name.
        name: String
    }
}

/// Operation-time error returned to the host.
#[derive(Debug, Error)]
pub enum OperationError {
    /// A record lifecycle method failed.
    #[error(transparent)]
    Lifecycle(BoxError),

    /// The host state surface rejected a write.
    #[error(transparent)]
    State(BoxError),

    /// A state value does not fit the field it maps to.
    #[error("state value for `{key}` is {found}, field `{record}.{field}` holds {expected}")]
    ValueKind {
        /// Record type name.
        record:   &'static str,
        /// Internal field identifier.
        field:    &'static str,
        /// External schema key.
        key:      String,
        /// Kind the field holds.
        expected: Kind,
        /// Kind found in state.
        found:    Kind
    },

    /// The adapter was driven directly for an operation the record lacks.
    #[error("type `{record}` does not implement {capability}")]
    Unsupported {
        /// Record type name.
        record:     &'static str,
        /// Capability the operation needs.
        capability: Capability
    }
}

impl OperationError {
    /// Check if the error came from a record lifecycle method.
    pub const fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Lifecycle(_))
    }

    /// Check if the error came from the state surface.
    pub const fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }

    /// Borrow the carried error as `E`, if it is one.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Lifecycle(e) | Self::State(e) => e.downcast_ref::<E>(),
            _ => None
        }
    }
}

/// Result alias for lifecycle operations.
pub type Result<T, E = OperationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn lifecycle_error_is_transparent() {
        let err = OperationError::Lifecycle(Box::new(Boom));
        assert!(err.is_lifecycle());
        assert!(!err.is_state());
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.downcast_ref::<Boom>(), Some(&Boom));
    }

    #[test]
    fn value_kind_display() {
        let err = OperationError::ValueKind {
            record:   "Bucket",
            field:    "force_destroy",
            key:      "force_destroy".to_string(),
            expected: Kind::Bool,
            found:    Kind::String
        };
        assert_eq!(
            err.to_string(),
            "state value for `force_destroy` is string, field `Bucket.force_destroy` holds bool"
        );
        assert!(err.downcast_ref::<Boom>().is_none());
    }

    #[test]
    fn duplicate_key_display() {
        let fault = ConfigFault::DuplicateKey {
            record: "Zone",
            key:    "name".to_string(),
            first:  "name",
            second: "display_name"
        };
        assert_eq!(
            fault.to_string(),
            "fields `Zone.name` and `Zone.display_name` both map to schema key `name`"
        );
    }

    #[test]
    fn missing_capability_display() {
        let fault = ConfigFault::MissingCapability {
            record:   "Zone",
            required: "Resource",
            missing:  Capability::Resource
        };
        assert_eq!(
            fault.to_string(),
            "type `Zone` is not a Resource: missing Resource capability"
        );
    }
}
