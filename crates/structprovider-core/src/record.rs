// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record types and their lifecycle capabilities.
//!
//! A record is a flat struct standing in for a managed resource or a lookup.
//! It implements some subset of the capability traits:
//!
//! | Trait | Methods | Needed by |
//! |-------|---------|-----------|
//! | [`Identifier`] | `id` | data sources, resources |
//! | [`Reader`] | `read` | data sources, resources |
//! | [`Resource`] | `create`, `delete` | resources |
//! | [`Updater`] | `update` | resources with in-place update |
//!
//! The [`Record`] trait is the glue the adapter drives. It is normally
//! generated by `#[derive(Record)]`, which emits the field table and
//! forwards [`Record::invoke`] to whichever capability traits were declared.
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Record, Default)]
//! #[record(resource, meta = "Client", error = "ClientError")]
//! pub struct Bucket {
//!     #[tf(",required,forcenew")]
//!     pub name: String
//! }
//!
//! impl Identifier for Bucket {
//!     fn id(&self) -> String {
//!         self.name.clone()
//!     }
//! }
//!
//! #[async_trait]
//! impl Reader for Bucket {
//!     async fn read(&mut self, client: &Client) -> Result<(), ClientError> {
//!         client.head_bucket(&self.name).await
//!     }
//! }
//! ```

use std::fmt;

use async_trait::async_trait;

use crate::{error::BoxError, field::Field};

/// A named lifecycle capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// [`Identifier`].
    Identifier,

    /// [`Reader`].
    Reader,

    /// [`Resource`].
    Resource,

    /// [`Updater`].
    Updater
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "Identifier",
            Self::Reader => "Reader",
            Self::Resource => "Resource",
            Self::Updater => "Updater"
        };
        f.write_str(name)
    }
}

/// Set of capability traits a record type implements.
///
/// Computed once at registration and stored next to the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Implements [`Identifier`].
    pub identifier: bool,

    /// Implements [`Reader`].
    pub reader: bool,

    /// Implements [`Resource`].
    pub resource: bool,

    /// Implements [`Updater`].
    pub updater: bool
}

impl Capabilities {
    /// No capabilities.
    pub const NONE: Self = Self {
        identifier: false,
        reader:     false,
        resource:   false,
        updater:    false
    };

    /// Identifier + Reader.
    pub const DATA_SOURCE: Self = Self {
        identifier: true,
        reader:     true,
        resource:   false,
        updater:    false
    };

    /// Identifier + Reader + Resource.
    pub const RESOURCE: Self = Self {
        identifier: true,
        reader:     true,
        resource:   true,
        updater:    false
    };

    /// Identifier + Reader + Resource + Updater.
    pub const UPDATER: Self = Self {
        identifier: true,
        reader:     true,
        resource:   true,
        updater:    true
    };

    /// Check if a single capability is present.
    pub const fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Identifier => self.identifier,
            Capability::Reader => self.reader,
            Capability::Resource => self.resource,
            Capability::Updater => self.updater
        }
    }

    /// First capability of `required` that is missing here.
    pub const fn missing(&self, required: Self) -> Option<Capability> {
        if required.identifier && !self.identifier {
            Some(Capability::Identifier)
        } else if required.reader && !self.reader {
            Some(Capability::Reader)
        } else if required.resource && !self.resource {
            Some(Capability::Resource)
        } else if required.updater && !self.updater {
            Some(Capability::Updater)
        } else {
            None
        }
    }

    /// Check if the set satisfies the data source contract.
    pub const fn is_data_source(&self) -> bool {
        self.missing(Self::DATA_SOURCE).is_none()
    }

    /// Check if the set satisfies the resource contract.
    pub const fn is_resource(&self) -> bool {
        self.missing(Self::RESOURCE).is_none()
    }

    /// Check if the set satisfies the resource contract with update.
    pub const fn is_updater(&self) -> bool {
        self.missing(Self::UPDATER).is_none()
    }
}

/// Lifecycle method selector passed to [`Record::invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`Resource::create`].
    Create,

    /// [`Reader::read`].
    Read,

    /// [`Updater::update`].
    Update,

    /// [`Resource::delete`].
    Delete
}

impl Operation {
    /// Capability the operation dispatches to.
    pub const fn capability(&self) -> Capability {
        match self {
            Self::Create | Self::Delete => Capability::Resource,
            Self::Read => Capability::Reader,
            Self::Update => Capability::Updater
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete"
        };
        f.write_str(name)
    }
}

/// A flat record type the adapter can drive.
///
/// Instances are created zero-valued through [`Default`] at the start of
/// every operation, filled from state, mutated by one lifecycle method and
/// written back.
#[async_trait]
pub trait Record: Default + Send + Sync + 'static {
    /// Opaque context handed to lifecycle methods (API clients and such).
    type Meta: ?Sized + Send + Sync + 'static;

    /// Error returned by lifecycle methods.
    type Error: Into<BoxError> + Send + 'static;

    /// Type name used in faults and logs.
    const NAME: &'static str;

    /// Field descriptor table, one entry per struct field in declaration
    /// order.
    fn fields() -> Vec<Field<Self>>;

    /// Capability traits this type implements.
    fn capabilities() -> Capabilities;

    /// Identity string, for types implementing [`Identifier`].
    fn identity(&self) -> Option<String>;

    /// Run one lifecycle method.
    ///
    /// Returns `None` when the type lacks the capability behind `operation`.
    async fn invoke(
        &mut self,
        operation: Operation,
        meta: &Self::Meta
    ) -> Option<Result<(), Self::Error>>;
}

/// Exposes the external identity of a managed object.
///
/// An empty string means the object does not exist.
pub trait Identifier {
    /// Identity string.
    fn id(&self) -> String;
}

/// Refreshes the record from the backing system.
#[async_trait]
pub trait Reader: Record {
    /// Pull authoritative values into `self`.
    async fn read(&mut self, meta: &Self::Meta) -> Result<(), Self::Error>;
}

/// A fully managed object.
#[async_trait]
pub trait Resource: Identifier + Reader {
    /// Create the object described by `self`.
    async fn create(&mut self, meta: &Self::Meta) -> Result<(), Self::Error>;

    /// Destroy the object described by `self`.
    async fn delete(&mut self, meta: &Self::Meta) -> Result<(), Self::Error>;
}

/// A managed object that supports in-place update.
#[async_trait]
pub trait Updater: Resource {
    /// Apply the changed fields of `self`.
    async fn update(&mut self, meta: &Self::Meta) -> Result<(), Self::Error>;
}
